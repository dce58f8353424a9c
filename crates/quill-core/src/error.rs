//! Error types for quill-core

use thiserror::Error;

/// Result type alias using quill-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quill-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required form field was empty at submit time
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
