//! Persistent key/value area behind the override store.
//!
//! # Responsibility
//! - Define the storage capability the resolver is given, instead of
//!   probing the environment for persistence at call time.
//! - Provide SQLite, in-memory and no-op implementations.
//!
//! # Invariants
//! - Values are opaque UTF-8 text; parsing belongs to callers.
//! - `remove_value` on a missing key succeeds.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite_kv;

pub use memory::{MemoryKeyValueStorage, NoopKeyValueStorage};
pub use sqlite_kv::SqliteKeyValueStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Backend refused the operation (e.g. poisoned in-memory state).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "storage database error: {err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Query(value))
    }
}

/// Key/value capability injected into the override store.
pub trait KeyValueStorage {
    fn get_value(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_value(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_value(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_value(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_value(key)
    }

    fn set_value(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_value(key, value)
    }

    fn remove_value(&self, key: &str) -> StorageResult<()> {
        (**self).remove_value(key)
    }
}
