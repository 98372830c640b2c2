//! Domain errors for the docshelf catalog

use thiserror::Error;

/// Core domain errors
///
/// Construction variants render the exact message the validation contract
/// promises; adapter variants carry the reason produced at the port boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Contributor id cannot be empty")]
    EmptyContributorId,

    #[error("Contributor name cannot be empty")]
    EmptyContributorName,

    #[error("Document name cannot be empty")]
    EmptyDocumentName,

    #[error("Document version cannot be empty")]
    EmptyVersion,

    #[error("Document version must follow semantic versioning format (x.y.z)")]
    MalformedVersion,

    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("{reason}")]
    Repository { reason: String },

    #[error("{reason}")]
    Notification { reason: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
