//! Document entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Contributor;
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{DocumentId, Version};

/// A catalog document
///
/// Immutable value object. Contributor and attachment order is the arrival
/// order from the source and carries no further meaning. Updates replace the
/// whole document in the owning collection rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    name: String,
    version: Version,
    created_at: DateTime<Utc>,
    contributors: Vec<Contributor>,
    attachments: Vec<String>,
}

impl Document {
    /// Create a document, rejecting an empty or whitespace-only name
    ///
    /// Version validity is guaranteed by the [`Version`] type; the id and
    /// the contributors are each validated where they are constructed.
    pub fn new(
        id: DocumentId,
        name: impl Into<String>,
        version: Version,
        created_at: DateTime<Utc>,
        contributors: Vec<Contributor>,
        attachments: Vec<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyDocumentName);
        }

        Ok(Self {
            id,
            name,
            version,
            created_at,
            contributors,
            attachments,
        })
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }
}
