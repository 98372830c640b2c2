//! Application container wiring
//!
//! Registers the full dependency graph: adapters, use cases, and services.
//! Everything is lazy; nothing is constructed until first resolution.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Container, DiError, DiResult};

use docshelf_application::{
    CreateDocumentUseCase, DocumentService, GetDocumentsUseCase, NotificationManager,
    SortDocumentsUseCase,
};
use docshelf_events::EventStreamChannel;
use docshelf_http::{HttpConfig, HttpDocumentRepository};

/// Static application configuration supplied at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Base URL of the document catalog API
    pub api_base_url: String,
    /// URL of the live notification stream
    pub events_url: String,
}

/// Wire the whole application graph into a fresh container
pub fn create_application_container(config: ApplicationConfig) -> DiResult<Container> {
    let container = Container::new();

    let api_base_url = config.api_base_url.clone();
    container.register(move |_| {
        HttpDocumentRepository::new(api_base_url.clone(), HttpConfig::default())
            .map(Arc::new)
            .map_err(|e| DiError::ResolutionFailed {
                message: format!("document repository: {e}"),
            })
    })?;

    let events_url = config.events_url.clone();
    container.register(move |_| {
        EventStreamChannel::new(events_url.clone())
            .map(Arc::new)
            .map_err(|e| DiError::ResolutionFailed {
                message: format!("notification channel: {e}"),
            })
    })?;

    container.register(|c| {
        let repository = c.resolve::<HttpDocumentRepository>()?;
        Ok(Arc::new(GetDocumentsUseCase::new(repository)))
    })?;

    container.register(|_| Ok(Arc::new(SortDocumentsUseCase::new())))?;

    container.register(|_| Ok(Arc::new(CreateDocumentUseCase::new())))?;

    container.register(|c| {
        Ok(Arc::new(DocumentService::new(
            c.resolve::<GetDocumentsUseCase>()?,
            c.resolve::<SortDocumentsUseCase>()?,
            c.resolve::<CreateDocumentUseCase>()?,
        )))
    })?;

    container.register(|c| {
        let channel = c.resolve::<EventStreamChannel>()?;
        Ok(Arc::new(NotificationManager::new(channel)))
    })?;

    info!("application container wired");
    Ok(container)
}
