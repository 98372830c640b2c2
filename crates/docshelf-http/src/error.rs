//! HTTP adapter error types

use thiserror::Error;

use docshelf_domain::DomainError;

/// HTTP adapter errors
///
/// These stay inside the adapter; crossing the repository port they collapse
/// to the two reasons the port contract names.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP status {status}")]
    Status { status: reqwest::StatusCode },

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

impl From<HttpError> for DomainError {
    fn from(err: HttpError) -> Self {
        let reason = match &err {
            HttpError::Status { .. } => "Failed to fetch documents",
            // A body that fails to decode means the endpoint answered and
            // the fetch itself is what failed.
            HttpError::Request(e) if e.is_decode() => "Failed to fetch documents",
            _ => "Connection error",
        };

        tracing::warn!(error = %err, "document fetch failed");
        DomainError::Repository {
            reason: reason.to_string(),
        }
    }
}
