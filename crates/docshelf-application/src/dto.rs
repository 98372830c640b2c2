//! Commands and presentation-facing payloads

use serde::{Deserialize, Serialize};

/// Input for creating a new document
///
/// Contributors are plain names; the use case synthesizes their identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDocumentCommand {
    pub name: String,
    pub contributors: Vec<String>,
    pub attachments: Vec<String>,
}

/// The slice of a notification the presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNotification {
    pub document_title: String,
    pub user_name: String,
}
