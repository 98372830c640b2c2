//! Repository interfaces for document retrieval
//!
//! The domain layer defines only the contract; infrastructure crates supply
//! the transport.

use async_trait::async_trait;

use crate::entities::Document;
use crate::errors::DomainResult;

/// Port for fetching the document collection from its source of truth
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Retrieve every document known to the source
    ///
    /// Transport failures surface as [`crate::DomainError::Repository`];
    /// they are not retried at this layer.
    async fn get_all(&self) -> DomainResult<Vec<Document>>;
}
