//! Contributor entity

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// A person credited on a document
///
/// Immutable after construction; identity is the `id`. Contributors are
/// owned by value by their document and never shared between documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    id: String,
    name: String,
}

impl Contributor {
    /// Create a contributor, rejecting empty or whitespace-only fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(DomainError::EmptyContributorId);
        }
        if name.trim().is_empty() {
            return Err(DomainError::EmptyContributorName);
        }

        Ok(Self { id, name })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
