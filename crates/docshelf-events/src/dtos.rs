//! Wire-format DTO for document-created announcements

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_domain::{DomainError, DomainResult, NotificationData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDto {
    #[serde(rename = "DocumentID")]
    pub document_id: String,
    #[serde(rename = "DocumentTitle")]
    pub document_title: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "UserName")]
    pub user_name: String,
}

impl NotificationDto {
    /// Map the wire payload to the domain event, validating the timestamp
    pub fn into_domain(self) -> DomainResult<NotificationData> {
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| DomainError::InvalidTimestamp {
                value: self.timestamp.clone(),
            })?;

        Ok(NotificationData {
            document_id: self.document_id,
            document_title: self.document_title,
            timestamp,
            user_id: self.user_id,
            user_name: self.user_name,
        })
    }
}
