//! Streaming HTTP implementation of the notification channel port

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::StreamExt;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::dtos::NotificationDto;
use crate::error::EventsError;

use docshelf_domain::{DomainError, DomainResult, NotificationCallback, NotificationChannel};

type Callbacks = Arc<Mutex<Vec<NotificationCallback>>>;

/// Persistent push feed over streaming HTTP
///
/// `connect` spawns a reader task on the current tokio runtime; each inbound
/// SSE `data:` line is decoded, validated, and dispatched to every registered
/// callback in registration order. There is no automatic reconnection.
pub struct EventStreamChannel {
    url: String,
    client: reqwest::Client,
    callbacks: Callbacks,
    reader: Mutex<Option<JoinHandle<()>>>,
}

impl EventStreamChannel {
    /// Build a channel for the given stream URL
    pub fn new(url: impl Into<String>) -> Result<Self, EventsError> {
        // No overall request timeout: the stream is meant to stay open.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| EventsError::Build(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
            callbacks: Arc::new(Mutex::new(Vec::new())),
            reader: Mutex::new(None),
        })
    }
}

impl NotificationChannel for EventStreamChannel {
    fn connect(&self) -> DomainResult<()> {
        let mut reader = self.reader.lock().unwrap();
        if reader.as_ref().is_some_and(|task| !task.is_finished()) {
            debug!("event stream already connected");
            return Ok(());
        }

        let handle = Handle::try_current().map_err(|_| DomainError::Notification {
            reason: "Connection error".to_string(),
        })?;

        let client = self.client.clone();
        let url = self.url.clone();
        let callbacks = Arc::clone(&self.callbacks);
        *reader = Some(handle.spawn(read_loop(client, url, callbacks)));
        Ok(())
    }

    fn disconnect(&self) {
        if let Some(task) = self.reader.lock().unwrap().take() {
            task.abort();
            info!("event stream disconnected");
        }
    }

    fn on_notification(&self, callback: NotificationCallback) {
        self.callbacks.lock().unwrap().push(callback);
    }
}

impl Drop for EventStreamChannel {
    fn drop(&mut self) {
        self.disconnect();
    }
}

async fn read_loop(client: reqwest::Client, url: String, callbacks: Callbacks) {
    let response = match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            warn!(status = %response.status(), %url, "event stream rejected");
            return;
        }
        Err(e) => {
            warn!(error = %e, %url, "event stream connection failed");
            return;
        }
    };
    info!(%url, "event stream connected");

    let mut stream = response.bytes_stream();
    let mut buffer: Vec<u8> = Vec::new();

    while let Some(chunk) = stream.next().await {
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "event stream read failed");
                break;
            }
        };

        buffer.extend_from_slice(&bytes);
        while let Some(newline) = buffer.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = buffer.drain(..=newline).collect();
            handle_line(&line[..line.len() - 1], &callbacks);
        }
    }

    info!("event stream closed");
}

fn handle_line(line: &[u8], callbacks: &Callbacks) {
    let Ok(text) = std::str::from_utf8(line) else {
        warn!("dropping non-utf8 event line");
        return;
    };
    let text = text.trim_end_matches('\r');

    // SSE framing: only `data:` lines carry payloads; comments, event names,
    // and blank separators are skipped.
    let Some(payload) = text.strip_prefix("data:") else {
        return;
    };
    let payload = payload.trim();
    if payload.is_empty() {
        return;
    }

    dispatch(payload, callbacks);
}

fn dispatch(payload: &str, callbacks: &Callbacks) {
    let dto: NotificationDto = match serde_json::from_str(payload) {
        Ok(dto) => dto,
        Err(e) => {
            warn!(error = %e, "dropping malformed notification payload");
            return;
        }
    };

    let notification = match dto.into_domain() {
        Ok(notification) => notification,
        Err(e) => {
            warn!(error = %e, "dropping invalid notification");
            return;
        }
    };

    debug!(document_id = %notification.document_id, "dispatching notification");
    for callback in callbacks.lock().unwrap().iter() {
        callback(notification.clone());
    }
}
