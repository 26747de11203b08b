//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A variable name contains characters outside `[A-Za-z0-9_]`.
    #[error("invalid variable name: {0}")]
    InvalidVariableName(String),

    /// A variable-file line is not of the form `NAME=value`.
    #[error("malformed binding on line {line}: {content}")]
    MalformedBinding {
        /// One-based line number within the source file.
        line: usize,
        /// The offending line text.
        content: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
