//! Tests for the HTTP signup backend adapter against a local stub server

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{extract::State, Router};
use reqwest::StatusCode as ClientStatus;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use domain_signup::{
    HttpBackendConfig, HttpSignupBackend, MaritalStatus, ResidenceType, SignupApplication,
    SignupPort, SubmissionError,
};

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: &'static str,
    received: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
}

async fn stub_handler(State(stub): State<Stub>, headers: HeaderMap, body: String) -> (StatusCode, String) {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    stub.received.lock().await.push((content_type, json));
    (stub.status, stub.body.to_string())
}

/// Starts a stub backend and returns its signup URL
async fn start_stub(stub: Stub) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/api/signup", post(stub_handler))
        .with_state(stub);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/signup")
}

fn stub(status: StatusCode, body: &'static str) -> Stub {
    Stub {
        status,
        body,
        received: Arc::default(),
    }
}

fn application() -> SignupApplication {
    SignupApplication {
        name: "Jo".to_string(),
        email: "jo@x.com".to_string(),
        phone: "1234567890".to_string(),
        residence_type: ResidenceType::Owned,
        monthly_income: dec!(5000),
        previous_loan: true,
        loan_amount: Some(dec!(1200)),
        marital_status: MaritalStatus::Single,
        number_of_dependents: 0,
        city: "X".to_string(),
        state: "Y".to_string(),
        zip_code: Some(12345),
    }
}

#[tokio::test]
async fn test_posts_json_and_returns_receipt() {
    let stub = stub(StatusCode::CREATED, r#"{"id":"abc"}"#);
    let received = stub.received.clone();
    let endpoint = start_stub(stub).await;

    let backend = HttpSignupBackend::new(HttpBackendConfig { endpoint });
    let receipt = backend.submit(&application()).await.unwrap();

    assert_eq!(receipt.status, 201);
    assert_eq!(receipt.body["id"], "abc");

    let received = received.lock().await;
    assert_eq!(received.len(), 1);
    let (content_type, body) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body["previousLoan"], true);
    assert_eq!(body["loanAmount"], serde_json::json!(1200.0));
    assert_eq!(body["zipCode"], 12345);
}

#[tokio::test]
async fn test_non_success_status_is_rejected() {
    let stub = stub(StatusCode::UNPROCESSABLE_ENTITY, r#"{"error":"duplicate"}"#);
    let received = stub.received.clone();
    let endpoint = start_stub(stub).await;

    let backend = HttpSignupBackend::new(HttpBackendConfig { endpoint });
    let err = backend.submit(&application()).await.unwrap_err();

    match err {
        SubmissionError::Rejected { status, body } => {
            assert_eq!(status, ClientStatus::UNPROCESSABLE_ENTITY);
            assert!(body.contains("duplicate"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(received.lock().await.len(), 1, "no retry after rejection");
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid() {
    let endpoint = start_stub(stub(StatusCode::OK, "<html>ok</html>")).await;

    let backend = HttpSignupBackend::new(HttpBackendConfig { endpoint });
    let err = backend.submit(&application()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_empty_success_body_is_accepted() {
    let endpoint = start_stub(stub(StatusCode::OK, "")).await;

    let backend = HttpSignupBackend::new(HttpBackendConfig { endpoint });
    let receipt = backend.submit(&application()).await.unwrap();

    assert_eq!(receipt.body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpSignupBackend::new(HttpBackendConfig {
        endpoint: format!("http://{addr}/api/signup"),
    });
    let err = backend.submit(&application()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Transport { .. }));
    assert_eq!(err.status(), None);
}
