//! SQLite connection wrapper (one connection per operation, CLI usage).

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

/// Default bound on lock waits when no configuration is available.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
        Ok(Self { conn })
    }

    /// Open a connection with the bounded lock wait taken from configuration.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let conn = Connection::open(Path::new(&cfg.database))?;
        conn.busy_timeout(Duration::from_millis(cfg.busy_timeout_ms))?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}

/// True when the underlying SQLite error is a lock wait that exceeded
/// `busy_timeout` — the one store failure reported as a timeout instead of
/// a plain read/write error.
pub fn is_busy(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(ffi, _)
            if matches!(
                ffi.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            )
    )
}

/// Map a failed store read to the error kind exposed by the adapter.
pub fn fetch_err(e: rusqlite::Error) -> AppError {
    if is_busy(&e) {
        AppError::Timeout(e.to_string())
    } else {
        AppError::DataFetch(e.to_string())
    }
}

/// Map a failed store write to the error kind exposed by the adapter.
pub fn write_err(e: rusqlite::Error) -> AppError {
    if is_busy(&e) {
        AppError::Timeout(e.to_string())
    } else {
        AppError::DataWrite(e.to_string())
    }
}
