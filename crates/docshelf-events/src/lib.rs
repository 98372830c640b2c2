//! Push notification adapter for docshelf
//!
//! Implements the domain's notification channel port over a persistent
//! streaming HTTP connection delivering SSE-style `data:` lines. Malformed
//! payloads are logged and dropped; they never escape the reader task.

pub mod channel;
pub mod dtos;
pub mod error;

pub use channel::EventStreamChannel;
pub use dtos::NotificationDto;
pub use error::EventsError;
