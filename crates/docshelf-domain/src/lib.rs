//! Docshelf domain layer
//!
//! Validated entities, value objects, and the port traits the rest of the
//! system depends on. The domain layer defines only contracts for external
//! collaborators (repositories, notification channels); implementations live
//! in infrastructure crates.

pub mod entities;
pub mod errors;
pub mod notifications;
pub mod repositories;
pub mod value_objects;

pub use entities::{Contributor, Document};
pub use errors::{DomainError, DomainResult};
pub use notifications::{NotificationCallback, NotificationChannel, NotificationData};
pub use repositories::DocumentRepository;
pub use value_objects::{DocumentId, Version};
