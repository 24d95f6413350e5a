//! Binary entry point: resolve the data directory, start file logging, open
//! the pets store and run the TUI until the user quits.
use std::sync::Arc;

use pets::{logging, run_app, App, Config, SqlitePetProvider};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;
    log::info!("starting pets with data in {}", config.data_dir.display());

    let provider = Arc::new(SqlitePetProvider::open(&config.db_path)?);
    let mut app = App::new(provider)?;
    let result = run_app(&mut app);

    if let Err(err) = &result {
        log::error!("pets exited with error: {err:#}");
    }
    result
}
