//! Integration tests for the HTTP document repository, using a mock server

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docshelf_domain::DocumentRepository;
use docshelf_http::{HttpConfig, HttpDocumentRepository};

fn document_json(id: &str, title: &str, version: &str) -> serde_json::Value {
    json!({
        "ID": id,
        "Title": title,
        "Version": version,
        "CreatedAt": "2024-01-15T12:00:00Z",
        "UpdatedAt": "2024-01-16T12:00:00Z",
        "Attachments": ["scan.pdf"],
        "Contributors": [{"ID": "c-1", "Name": "Ada"}]
    })
}

async fn repository_for(server: &MockServer) -> HttpDocumentRepository {
    HttpDocumentRepository::new(server.uri(), HttpConfig::default()).unwrap()
}

#[tokio::test]
async fn maps_a_successful_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            document_json("2", "Zebra", "3.0.1"),
            document_json("1", "Alpha", "1.0.0"),
        ])))
        .mount(&server)
        .await;

    let documents = repository_for(&server).await.get_all().await.unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].name(), "Zebra");
    assert_eq!(documents[0].version().to_string(), "3.0.1");
    assert_eq!(documents[1].id().as_str(), "1");
    assert_eq!(documents[1].contributors()[0].name(), "Ada");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = repository_for(&server).await.get_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch documents");
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
    // Start then drop the server so the port is closed.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let repository = HttpDocumentRepository::new(uri, HttpConfig::default()).unwrap();
    let err = repository.get_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Connection error");
}

#[tokio::test]
async fn unparsable_body_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = repository_for(&server).await.get_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch documents");
}

#[tokio::test]
async fn one_malformed_document_fails_the_whole_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            document_json("1", "Alpha", "1.0.0"),
            document_json("2", "Broken", "not-a-version"),
        ])))
        .mount(&server)
        .await;

    let err = repository_for(&server).await.get_all().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Document version must follow semantic versioning format (x.y.z)"
    );
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([document_json("1", "Alpha", "1.0.0")])),
        )
        .mount(&server)
        .await;

    let repository =
        HttpDocumentRepository::new(format!("{}/", server.uri()), HttpConfig::default()).unwrap();
    let documents = repository.get_all().await.unwrap();
    assert_eq!(documents.len(), 1);
}
