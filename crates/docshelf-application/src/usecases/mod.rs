//! Catalog use cases

mod create_document;
mod get_documents;
mod sort_documents;

pub use create_document::CreateDocumentUseCase;
pub use get_documents::GetDocumentsUseCase;
pub use sort_documents::{SortBy, SortDocumentsUseCase};
