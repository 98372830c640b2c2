//! Docshelf application layer
//!
//! Implements the catalog use cases over the domain layer and owns the
//! session-scoped document collection. Services here are constructed once
//! through the dependency container and depend only on domain abstractions:
//!
//! - [`CreateDocumentUseCase`] validates input and constructs new documents.
//! - [`GetDocumentsUseCase`] retrieves documents through the repository port.
//! - [`SortDocumentsUseCase`] orders a collection without mutating it.
//! - [`DocumentService`] aggregates the three and caches the current
//!   collection for the running session.
//! - [`NotificationManager`] bridges the push channel port to presentation
//!   callbacks.

pub mod dto;
pub mod errors;
pub mod services;
pub mod usecases;

pub use dto::{CreateDocumentCommand, DisplayNotification};
pub use errors::{ApplicationError, ApplicationResult};
pub use services::{DocumentService, NotificationManager};
pub use usecases::{
    CreateDocumentUseCase, GetDocumentsUseCase, SortBy, SortDocumentsUseCase,
};
