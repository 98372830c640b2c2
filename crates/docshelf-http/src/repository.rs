//! HTTP implementation of the document repository port

use async_trait::async_trait;
use tracing::debug;

use crate::config::HttpConfig;
use crate::dtos::DocumentDto;
use crate::error::HttpError;

use docshelf_domain::{Document, DocumentRepository, DomainError, DomainResult};

/// Fetches the document collection from the catalog API
pub struct HttpDocumentRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentRepository {
    /// Build a repository for `{base_url}/documents`
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_dtos(&self) -> Result<Vec<DocumentDto>, HttpError> {
        let url = format!("{}/documents", self.base_url);
        debug!(%url, "fetching documents");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status { status });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DocumentRepository for HttpDocumentRepository {
    /// Fetch and map the whole collection
    ///
    /// One malformed DTO fails the entire batch: silently dropping part of a
    /// catalog would go unnoticed, a visible error does not.
    async fn get_all(&self) -> DomainResult<Vec<Document>> {
        let dtos = self.fetch_dtos().await.map_err(DomainError::from)?;
        debug!(count = dtos.len(), "mapping documents");

        dtos.into_iter().map(DocumentDto::into_domain).collect()
    }
}
