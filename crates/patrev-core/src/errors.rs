//! Validation errors for domain values.
//!
//! Transport and session errors live in `patrev-client` and `patrev-auth`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A file extension is not accepted for the given document type.
    #[error("a {kind} upload must be one of [{accepted}], got '{file_name}'")]
    UnsupportedFile {
        kind: &'static str,
        file_name: String,
        accepted: String,
    },

    /// Data failed validation before being sent.
    #[error("Validation error: {0}")]
    Validation(String),
}
