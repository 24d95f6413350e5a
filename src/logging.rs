//! File-backed logging. The TUI owns stdout and stderr while it runs, so
//! records go to `pets.log` in the data directory instead.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config::Config;

/// Install the global logger. `RUST_LOG` overrides the default `info` level.
pub fn init(config: &Config) -> Result<()> {
    let file = open_log_file(&config.log_path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")
}

/// Open the log file for appending, creating its directory first.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
