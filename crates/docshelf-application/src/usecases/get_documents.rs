//! Fetch-documents use case

use std::sync::Arc;

use crate::errors::ApplicationResult;

use docshelf_domain::{Document, DocumentRepository};

/// Retrieves the document collection through the repository port
///
/// The repository's outcome is propagated unchanged; caching the result is
/// the [`crate::DocumentService`]'s responsibility, not this use case's.
pub struct GetDocumentsUseCase {
    repository: Arc<dyn DocumentRepository>,
}

impl GetDocumentsUseCase {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> ApplicationResult<Vec<Document>> {
        Ok(self.repository.get_all().await?)
    }
}
