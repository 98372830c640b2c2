//! Bridges the notification channel port to presentation callbacks

use std::sync::Arc;

use tracing::debug;

use crate::dto::DisplayNotification;
use crate::errors::ApplicationResult;

use docshelf_domain::NotificationChannel;

/// Exposes the live notification feed to the presentation layer
///
/// Trims each inbound event down to the fields a toast actually renders;
/// the full payload stays behind the port.
pub struct NotificationManager {
    channel: Arc<dyn NotificationChannel>,
}

impl NotificationManager {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self { channel }
    }

    /// Open the persistent connection
    pub fn connect(&self) -> ApplicationResult<()> {
        self.channel.connect()?;
        debug!("notification channel connected");
        Ok(())
    }

    /// Close the connection; queued deliveries are discarded
    pub fn disconnect(&self) {
        self.channel.disconnect();
    }

    /// Register a presentation callback for document-created events
    pub fn on_notification<F>(&self, callback: F)
    where
        F: Fn(DisplayNotification) + Send + Sync + 'static,
    {
        self.channel.on_notification(Box::new(move |notification| {
            callback(DisplayNotification {
                document_title: notification.document_title,
                user_name: notification.user_name,
            });
        }));
    }
}
