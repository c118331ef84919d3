use std::path::{Path, PathBuf};

use rusqlite::Connection;

/// The one adapter that talks to the record store. Every table access in
/// the crate goes through a connection obtained here; nothing else knows
/// the database path.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS credentials (
    id INTEGER PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    directory_id TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY,
    directory_id TEXT NOT NULL UNIQUE REFERENCES credentials(directory_id),
    account_type TEXT NOT NULL,
    display_name TEXT NOT NULL,
    email TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS job_posts (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    location TEXT NOT NULL,
    location_type TEXT NOT NULL,
    employment_type TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    author_id INTEGER NOT NULL REFERENCES accounts(id),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS applications (
    id INTEGER PRIMARY KEY,
    post_id INTEGER NOT NULL REFERENCES job_posts(id),
    account_id INTEGER NOT NULL REFERENCES accounts(id),
    created_at TEXT NOT NULL,
    UNIQUE(post_id, account_id)
);
";

impl RecordStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Opens a fresh connection with foreign keys enforced.
    pub fn open(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }

    pub fn init_schema(&self) -> rusqlite::Result<()> {
        let conn = self.open()?;
        conn.execute_batch(SCHEMA)
    }
}
