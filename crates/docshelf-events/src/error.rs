//! Notification adapter error types

use thiserror::Error;

/// Errors raised while setting up the notification channel
///
/// Failures on the live stream itself are logged and end the reader task;
/// they have no caller to return to.
#[derive(Debug, Error)]
pub enum EventsError {
    /// Client build error
    #[error("Failed to build event stream client: {0}")]
    Build(String),
}
