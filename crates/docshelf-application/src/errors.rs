//! Application layer error types

use thiserror::Error;

use docshelf_domain::DomainError;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
///
/// Validation messages are surfaced verbatim so callers can show them
/// unchanged; domain errors pass through transparently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// Use-case level input validation failed
    #[error("{0}")]
    Validation(String),

    /// Wrapped domain error
    #[error(transparent)]
    Domain(#[from] DomainError),
}
