//! Error types for the schemaprep core library
//!
//! Annotation resolution distinguishes "not applicable" (a handler does not
//! recognize the type, expressed as `Ok(None)`) from genuine failures. Only
//! the latter surface through this module's [`Error`] type.

use thiserror::Error;

/// Main error type for annotation resolution
#[derive(Error, Debug)]
pub enum Error {
    /// A dtype inferred from the source type contradicts an explicit
    /// `DType` annotation on the same field
    #[error("Conflicting dtype annotations: {inferred} and {declared}")]
    ConflictingDType {
        inferred: String,
        declared: String,
    },

    /// A handler with the same name is already registered
    #[error("Duplicate handler registration: {name}")]
    DuplicateHandler {
        name: String,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}
