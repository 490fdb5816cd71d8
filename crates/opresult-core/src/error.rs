//! Error types for the opresult core library
//!
//! Lookups into an [`OperationResult`](crate::OperationResult) are the only
//! operations that can fail on their own account; the JSON helpers on the
//! configuration and export types surface `serde_json` failures.

use thiserror::Error;

/// Main error type for opresult operations
#[derive(Error, Debug)]
pub enum Error {
    /// No entry exists at the requested ordinal position
    #[error("No error at position {position}")]
    PositionNotFound { position: usize },

    /// The collection holds no entries
    #[error("No {collection} found")]
    EmptyCollection { collection: &'static str },

    /// JSON conversion errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
