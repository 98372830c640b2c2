//! Sort-documents use case

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ApplicationError;

use docshelf_domain::Document;

/// Sort key for the document collection
///
/// Boundary layers parse the camel-case wire spelling via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Name,
    Version,
    CreatedAt,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Version => "version",
            SortBy::CreatedAt => "createdAt",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortBy::Name),
            "version" => Ok(SortBy::Version),
            "createdAt" => Ok(SortBy::CreatedAt),
            other => Err(ApplicationError::Validation(format!(
                "Unknown sort key: {other}"
            ))),
        }
    }
}

/// Orders a document collection without touching the input
///
/// The sort is stable: documents with equal keys keep their relative input
/// order, which matters because two documents can share a key (an identical
/// version, say).
#[derive(Debug, Default)]
pub struct SortDocumentsUseCase;

impl SortDocumentsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Return a new, ordered collection; the input slice is never mutated
    pub fn execute(&self, documents: &[Document], sort_by: SortBy) -> Vec<Document> {
        let mut sorted = documents.to_vec();
        sorted.sort_by(comparator(sort_by));
        sorted
    }
}

fn comparator(sort_by: SortBy) -> fn(&Document, &Document) -> Ordering {
    match sort_by {
        // Case-insensitive ascending; full collation is a presentation
        // concern the core does not take a dependency for.
        SortBy::Name => |a, b| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
        },
        SortBy::Version => |a, b| a.version().cmp(&b.version()),
        // Most-recent-first, matching the collection's prepend-newest policy.
        SortBy::CreatedAt => |a, b| b.created_at().cmp(&a.created_at()),
    }
}
