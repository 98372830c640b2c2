//! Document service owning the session's document collection

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::dto::CreateDocumentCommand;
use crate::errors::ApplicationResult;
use crate::usecases::{CreateDocumentUseCase, GetDocumentsUseCase, SortBy, SortDocumentsUseCase};

use docshelf_domain::Document;

/// Holds the authoritative in-memory document collection for the session
///
/// Constructed once via the container and torn down with the application.
/// The collection is replaced wholesale on a successful fetch and receives
/// new documents at the front; a failed operation never touches it.
pub struct DocumentService {
    get_documents_use_case: Arc<GetDocumentsUseCase>,
    sort_documents_use_case: Arc<SortDocumentsUseCase>,
    create_document_use_case: Arc<CreateDocumentUseCase>,
    documents: RwLock<Vec<Document>>,
}

impl DocumentService {
    pub fn new(
        get_documents_use_case: Arc<GetDocumentsUseCase>,
        sort_documents_use_case: Arc<SortDocumentsUseCase>,
        create_document_use_case: Arc<CreateDocumentUseCase>,
    ) -> Self {
        Self {
            get_documents_use_case,
            sort_documents_use_case,
            create_document_use_case,
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Fetch the collection from the repository and replace the held one
    ///
    /// On error the held collection stays as it was.
    pub async fn fetch_documents(&self) -> ApplicationResult<Vec<Document>> {
        let documents = self.get_documents_use_case.execute().await?;
        debug!(count = documents.len(), "replacing document collection");

        *self.documents.write().unwrap() = documents.clone();
        Ok(documents)
    }

    /// Sorted view of the current collection; the collection itself is untouched
    pub fn sort_documents(&self, sort_by: SortBy) -> Vec<Document> {
        let documents = self.documents.read().unwrap();
        self.sort_documents_use_case.execute(&documents, sort_by)
    }

    /// Create a document and prepend it so the newest appears first
    pub fn create_document(&self, cmd: CreateDocumentCommand) -> ApplicationResult<Document> {
        let document = self.create_document_use_case.execute(cmd)?;

        self.documents.write().unwrap().insert(0, document.clone());
        debug!(id = %document.id(), "document created");
        Ok(document)
    }

    /// Snapshot of the current collection
    pub fn all_documents(&self) -> Vec<Document> {
        self.documents.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    use docshelf_domain::{
        DocumentId, DocumentRepository, DomainError, DomainResult, Version,
    };

    /// Repository whose outcome can be swapped between calls
    struct ScriptedRepository {
        outcome: Mutex<DomainResult<Vec<Document>>>,
    }

    impl ScriptedRepository {
        fn returning(outcome: DomainResult<Vec<Document>>) -> Arc<Self> {
            Arc::new(Self {
                outcome: Mutex::new(outcome),
            })
        }

        fn set(&self, outcome: DomainResult<Vec<Document>>) {
            *self.outcome.lock().unwrap() = outcome;
        }
    }

    #[async_trait]
    impl DocumentRepository for ScriptedRepository {
        async fn get_all(&self) -> DomainResult<Vec<Document>> {
            self.outcome.lock().unwrap().clone()
        }
    }

    fn service(repository: Arc<ScriptedRepository>) -> DocumentService {
        DocumentService::new(
            Arc::new(GetDocumentsUseCase::new(repository)),
            Arc::new(SortDocumentsUseCase::new()),
            Arc::new(CreateDocumentUseCase::new()),
        )
    }

    fn document(id: &str, name: &str, version: &str) -> Document {
        Document::new(
            DocumentId::new(id),
            name,
            Version::parse(version).unwrap(),
            Utc::now(),
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn create_command(name: &str) -> CreateDocumentCommand {
        CreateDocumentCommand {
            name: name.to_string(),
            contributors: vec!["Ada".to_string()],
            attachments: vec![],
        }
    }

    #[tokio::test]
    async fn fetch_replaces_the_collection() {
        let repository = ScriptedRepository::returning(Ok(vec![
            document("1", "Alpha", "1.0.0"),
            document("2", "Zebra", "3.0.1"),
        ]));
        let service = service(repository);

        let fetched = service.fetch_documents().await.unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(service.all_documents().len(), 2);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_previous_collection() {
        let repository = ScriptedRepository::returning(Ok(vec![document("1", "Alpha", "1.0.0")]));
        let service = service(Arc::clone(&repository));
        service.fetch_documents().await.unwrap();

        repository.set(Err(DomainError::Repository {
            reason: "Connection error".into(),
        }));

        let err = service.fetch_documents().await.unwrap_err();
        assert_eq!(err.to_string(), "Connection error");
        assert_eq!(service.all_documents().len(), 1, "collection untouched");
    }

    #[tokio::test]
    async fn create_prepends_to_the_collection() {
        let repository = ScriptedRepository::returning(Ok(vec![document("1", "Alpha", "1.0.0")]));
        let service = service(repository);
        service.fetch_documents().await.unwrap();

        let created = service.create_document(create_command("Brand new")).unwrap();

        let all = service.all_documents();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id(), created.id(), "new document is first");
        assert_eq!(all[1].name(), "Alpha");
    }

    #[test]
    fn failed_create_leaves_the_collection_untouched() {
        let repository = ScriptedRepository::returning(Ok(vec![]));
        let service = service(repository);

        let err = service.create_document(create_command("  ")).unwrap_err();
        assert_eq!(err.to_string(), "Document name is required");
        assert!(service.all_documents().is_empty());
    }

    #[tokio::test]
    async fn sort_does_not_mutate_the_held_collection() {
        let repository = ScriptedRepository::returning(Ok(vec![
            document("1", "Zebra", "3.0.1"),
            document("2", "Alpha", "1.0.0"),
        ]));
        let service = service(repository);
        service.fetch_documents().await.unwrap();

        let sorted = service.sort_documents(SortBy::Name);
        let sorted_names: Vec<_> = sorted.iter().map(Document::name).collect();
        assert_eq!(sorted_names, ["Alpha", "Zebra"]);

        let held_names: Vec<_> = service
            .all_documents()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(held_names, ["Zebra", "Alpha"], "held order unchanged");
    }
}
