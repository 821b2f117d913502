//! Task store: in-memory list of record, mirrored to durable storage.
//!
//! # Responsibility
//! - Own the ordered task list and the dark-mode preference.
//! - Persist the full state synchronously on every mutation.
//!
//! # Invariants
//! - The store is the only owner of the task list; view/form/sweep read
//!   snapshots or request mutations through store accessors.
//! - Every mutator flushes to storage before returning.

use crate::db::DbError;
use crate::model::task::{TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod kv;
pub mod task_store;

pub use task_store::{TaskFields, TaskStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for task mutations and persistence.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    Db(DbError),
    TaskNotFound(TaskId),
    /// The in-memory list could not be encoded for persistence.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::TaskNotFound(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}
