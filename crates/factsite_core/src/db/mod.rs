//! SQLite bootstrap for the persistent key/value area.
//!
//! # Responsibility
//! - Open file or in-memory connections ready for key/value storage.
//! - Apply schema migrations in order before first use.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - No storage read or write happens before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Where a connection was opened; `None` is a private in-memory database.
pub type DbTarget = Option<PathBuf>;

#[derive(Debug)]
pub enum DbError {
    /// The override database could not be opened or configured.
    Open {
        target: DbTarget,
        source: rusqlite::Error,
    },
    /// A schema migration failed and was rolled back.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a newer build; overrides in it are left alone.
    SchemaTooNew { found: u32, supported: u32 },
    /// A read or write against `kv_entries` failed.
    Query(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open {
                target: Some(path),
                source,
            } => write!(
                f,
                "cannot open override database `{}`: {source}",
                path.display()
            ),
            Self::Open {
                target: None,
                source,
            } => write!(f, "cannot open in-memory override database: {source}"),
            Self::Migration { version, source } => {
                write!(f, "override schema migration v{version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "override database uses schema v{found}; this build reads up to v{supported}"
            ),
            Self::Query(err) => write!(f, "key/value query failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migration { source, .. } => Some(source),
            Self::Query(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}
