//! End-to-end test for the live notification path through the container

use std::sync::{Arc, Mutex};
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docshelf::application::{DisplayNotification, NotificationManager};
use docshelf::di::{create_application_container, ApplicationConfig};

#[tokio::test]
async fn notifications_reach_presentation_callbacks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(concat!(
                    "data: {\"DocumentID\":\"d-1\",\"DocumentTitle\":\"Field report\",",
                    "\"Timestamp\":\"2024-02-01T09:30:00Z\",\"UserID\":\"u-1\",",
                    "\"UserName\":\"ada\"}\n"
                )),
        )
        .mount(&server)
        .await;

    let container = create_application_container(ApplicationConfig {
        api_base_url: server.uri(),
        events_url: format!("{}/events", server.uri()),
    })
    .unwrap();

    let manager = container.resolve::<NotificationManager>().unwrap();

    let received: Arc<Mutex<Vec<DisplayNotification>>> = Arc::default();
    let sink = Arc::clone(&received);
    manager.on_notification(move |display| sink.lock().unwrap().push(display));

    manager.connect().unwrap();

    let mut delivered = Vec::new();
    for _ in 0..100 {
        delivered = received.lock().unwrap().clone();
        if !delivered.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].document_title, "Field report");
    assert_eq!(delivered[0].user_name, "ada");

    manager.disconnect();
}
