//! SQLite query layer for the monuments site

pub mod store;

use thiserror::Error;
use tokio::task::JoinError;

// Re-exports
pub use store::SqliteStore;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid table name '{0}'")]
    InvalidTable(String),

    #[error("table '{0}' not found in database")]
    MissingTable(String),

    #[error("join error: {0}")]
    Join(#[from] JoinError),
}
