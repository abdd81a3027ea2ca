use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use crm_server::email::{EmailSender, OutgoingEmail};
use crm_server::error::EmailError;
use crm_server::store::SubscriberLog;
use crm_server::subscribe::{subscribe_router, AppState};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::Rejected {
                status: 503,
                body: "mail api down".into(),
            });
        }
        self.sent.lock().expect("lock").push(email.clone());
        Ok(())
    }
}

fn db_path(name: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    format!("/tmp/crm-server-tests/api-{name}-{nanos}.db")
}

fn app(name: &str, mailer: Arc<RecordingMailer>) -> (axum::Router, SubscriberLog) {
    let subscribers = SubscriberLog::open(&db_path(name)).expect("open");
    let state = AppState {
        subscribers: subscribers.clone(),
        mailer,
    };
    (subscribe_router(state), subscribers)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/subscribe")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn valid_email_is_stored_and_welcomed() {
    let mailer = Arc::new(RecordingMailer::default());
    let (app, subscribers) = app("valid", mailer.clone());

    let response = app
        .oneshot(post_json(r#"{"email":"Buyer@Example.com"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!({ "success": true }));

    assert_eq!(subscribers.count().expect("count"), 1);
    let row = subscribers.latest().expect("latest").expect("row");
    assert_eq!(row.email, "buyer@example.com");
    assert_eq!(row.source, "website");

    let sent = mailer.sent.lock().expect("lock");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "buyer@example.com");
}

#[tokio::test]
async fn invalid_email_is_rejected_without_side_effects() {
    let mailer = Arc::new(RecordingMailer::default());
    let (app, subscribers) = app("invalid", mailer.clone());

    let response = app
        .oneshot(post_json(r#"{"email":"not-an-email"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().is_some_and(|e| e.contains("invalid email")));
    assert_eq!(subscribers.count().expect("count"), 0);
    assert!(mailer.sent.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (app, _) = app("malformed", Arc::new(RecordingMailer::default()));

    let response = app.oneshot(post_json("{\"email\":")).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
}

#[tokio::test]
async fn email_failure_is_a_server_error() {
    let mailer = Arc::new(RecordingMailer {
        fail: true,
        ..RecordingMailer::default()
    });
    let (app, subscribers) = app("mail-down", mailer);

    let response = app
        .oneshot(post_json(r#"{"email":"buyer@example.com"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().is_some_and(|e| e.contains("mail api down")));
    // The row is written before the email call.
    assert_eq!(subscribers.count().expect("count"), 1);
}

#[tokio::test]
async fn only_post_is_routed() {
    let (app, _) = app("method", Arc::new(RecordingMailer::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/subscribe")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_check() {
    let (app, _) = app("health", Arc::new(RecordingMailer::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}
