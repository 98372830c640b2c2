//! HTTP adapter for the docshelf document repository port
//!
//! Issues `GET {base_url}/documents`, maps wire DTOs to domain entities, and
//! converts transport failures to the repository port's error contract. No
//! retries happen at this layer; errors surface immediately.

pub mod config;
pub mod dtos;
pub mod error;
pub mod repository;

pub use config::HttpConfig;
pub use dtos::{ContributorDto, DocumentDto};
pub use error::HttpError;
pub use repository::HttpDocumentRepository;
