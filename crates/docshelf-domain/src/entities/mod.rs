//! Domain entities with construction-time validation

mod contributor;
mod document;

pub use contributor::Contributor;
pub use document::Document;
