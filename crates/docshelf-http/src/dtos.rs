//! Wire-format DTOs for the documents endpoint
//!
//! Field names follow the API's PascalCase contract; mapping to the domain
//! is where validation happens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_domain::{Contributor, Document, DocumentId, DomainError, DomainResult, Version};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorDto {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDto {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: String,
    // Sent by the API but not part of the domain model.
    #[serde(rename = "UpdatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "Attachments")]
    pub attachments: Vec<String>,
    #[serde(rename = "Contributors")]
    pub contributors: Vec<ContributorDto>,
}

impl ContributorDto {
    pub fn into_domain(self) -> DomainResult<Contributor> {
        Contributor::new(self.id, self.name)
    }
}

impl DocumentDto {
    /// Map the wire representation to a validated domain document
    ///
    /// Fails on the first invalid field; the caller decides what a failure
    /// means for the rest of the batch.
    pub fn into_domain(self) -> DomainResult<Document> {
        let created_at = parse_timestamp(&self.created_at)?;
        let version = Version::parse(&self.version)?;

        let contributors = self
            .contributors
            .into_iter()
            .map(ContributorDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Document::new(
            DocumentId::new(self.id),
            self.title,
            version,
            created_at,
            contributors,
            self.attachments,
        )
    }
}

fn parse_timestamp(value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidTimestamp {
            value: value.to_string(),
        })
}
