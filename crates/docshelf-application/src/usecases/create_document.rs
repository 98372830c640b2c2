//! Create-document use case

use chrono::Utc;

use crate::dto::CreateDocumentCommand;
use crate::errors::{ApplicationError, ApplicationResult};

use docshelf_domain::{Contributor, Document, DocumentId, Version};

/// Validates input and constructs a new document with its contributors
///
/// Stateless; failures are terminal for the call and leave no trace. The
/// caller decides whether to retry with corrected input.
#[derive(Debug, Default)]
pub struct CreateDocumentUseCase;

impl CreateDocumentUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, cmd: CreateDocumentCommand) -> ApplicationResult<Document> {
        if cmd.name.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "Document name is required".into(),
            ));
        }

        if cmd.contributors.is_empty() {
            return Err(ApplicationError::Validation(
                "At least one contributor is required".into(),
            ));
        }

        let contributors = cmd
            .contributors
            .into_iter()
            .map(|name| Contributor::new(uuid::Uuid::new_v4().to_string(), name))
            .collect::<Result<Vec<_>, _>>()?;

        let document = Document::new(
            DocumentId::generate(),
            cmd.name,
            Version::INITIAL,
            Utc::now(),
            contributors,
            cmd.attachments,
        )?;

        Ok(document)
    }
}
