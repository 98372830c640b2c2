//! Live notification port
//!
//! Documents created elsewhere are announced over a persistent push channel.
//! The domain defines the event payload and the channel contract; the wire
//! protocol belongs to the implementing adapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainResult;

/// A document-created announcement
///
/// Ephemeral: consumed once per event, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    pub document_id: String,
    pub document_title: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub user_name: String,
}

/// Callback invoked for each inbound notification
pub type NotificationCallback = Box<dyn Fn(NotificationData) + Send + Sync>;

/// Port for the live notification feed
///
/// Callbacks registered via [`on_notification`](Self::on_notification) are
/// invoked in registration order for every valid inbound event. Disconnecting
/// discards future deliveries; it does not cancel in-flight work.
pub trait NotificationChannel: Send + Sync {
    /// Open the persistent connection
    fn connect(&self) -> DomainResult<()>;

    /// Close the connection and discard future deliveries
    fn disconnect(&self);

    /// Register a callback for inbound notifications
    fn on_notification(&self, callback: NotificationCallback);
}
