use rusqlite::Connection;
use std::path::Path;

use super::migrations;

/// A SQLite connection whose schema is current.
///
/// Once opened, the `kv_store(key TEXT PRIMARY KEY, value TEXT NOT NULL,
/// updated_at INTEGER NOT NULL)` table is guaranteed to exist, which is all
/// [`crate::storage::SqliteStore`] relies on.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens or creates the database file at `path` and migrates it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let path = path.as_ref();
        let db = Self {
            conn: Connection::open(path)?,
        };
        migrations::run_all(&db.conn)?;
        log::info!(
            "Database opened at {} (schema v{})",
            path.display(),
            migrations::get_schema_version(&db.conn)
        );
        Ok(db)
    }

    /// A migrated database that disappears when dropped.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        migrations::run_all(&db.conn)?;
        Ok(db)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
