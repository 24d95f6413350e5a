use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Open (creating if needed) the SQLite file at `path` and run the lazy
/// migrations. The parent directory is created on demand.
pub fn open_database(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(path).context("failed to open SQLite database")?;
    ensure_schema(&conn)?;
    log::debug!("opened pets database at {}", path.display());
    Ok(conn)
}

/// Private in-memory database with the same schema. Used by tests and by
/// anything that needs a throwaway store.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Create the `pets` table when it does not exist yet. The CHECK clauses
/// mirror the provider's validation so a buggy caller cannot store a negative
/// weight or an unknown gender code.
fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS pets (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            breed TEXT NOT NULL DEFAULT '',
            gender INTEGER NOT NULL DEFAULT 0 CHECK (gender BETWEEN 0 AND 2),
            weight INTEGER NOT NULL DEFAULT 0 CHECK (weight >= 0)
        )",
        [],
    )
    .context("failed to create pets table")?;

    Ok(())
}
