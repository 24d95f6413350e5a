//! Where the application keeps its files.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "PETS_DATA_DIR";
/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".pets";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "pets.sqlite";
/// Log file written while the TUI owns the terminal.
const LOG_FILE_NAME: &str = "pets.log";

/// Resolved file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// Use `$PETS_DATA_DIR` when set and non-empty, otherwise `~/.pets`.
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var_os(DATA_DIR_ENV))
    }

    /// Lay every file out under `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_path: data_dir.join(LOG_FILE_NAME),
            data_dir,
        }
    }

    fn resolve(data_dir_override: Option<OsString>) -> Result<Self> {
        if let Some(dir) = data_dir_override.filter(|dir| !dir.is_empty()) {
            return Ok(Self::in_dir(dir));
        }

        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::in_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }
}
