use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;

use vocalingo::application::ports::{CheckOutcome, CheckerError, PronunciationChecker};
use vocalingo::domain::{MISSING_FIELDS_MESSAGE, PronunciationRequest};
use vocalingo::infrastructure::http::{CHECK_PRONUNCIATION_PATH, HttpPronunciationChecker};

use crate::helpers::{StubLlmClient, fenced, hello_feedback, spawn_server, test_app};

fn request() -> PronunciationRequest {
    PronunciationRequest::new("hello", "hello", "English").unwrap()
}

#[tokio::test]
async fn given_running_service_when_checking_then_returns_feedback_view() {
    let reply = fenced(&serde_json::to_string(&hello_feedback()).unwrap());
    let base_url = spawn_server(test_app(Arc::new(StubLlmClient::replying(reply)))).await;

    let outcome = HttpPronunciationChecker::new(&base_url)
        .check(&request())
        .await
        .unwrap();

    match outcome {
        CheckOutcome::Feedback(view) => {
            assert!(view.is_correct);
            assert_eq!(view.target_phonetic.as_deref(), Some("/həˈloʊ/"));
            assert_eq!(view.tips.len(), 3);
            assert!(view.cultural_context.is_none());
        }
        other => panic!("expected feedback, got {:?}", other),
    }
}

#[tokio::test]
async fn given_service_rejects_request_when_checking_then_surfaces_its_message() {
    let app = Router::new().route(
        CHECK_PRONUNCIATION_PATH,
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                axum::Json(serde_json::json!({ "error": MISSING_FIELDS_MESSAGE })),
            )
        }),
    );
    let base_url = spawn_server(app).await;

    let outcome = HttpPronunciationChecker::new(&base_url)
        .check(&request())
        .await
        .unwrap();

    assert_eq!(outcome, CheckOutcome::Rejected(MISSING_FIELDS_MESSAGE.to_string()));
}

#[tokio::test]
async fn given_model_failure_when_checking_then_reports_service_status() {
    let base_url = spawn_server(test_app(Arc::new(StubLlmClient::replying("not json")))).await;

    let result = HttpPronunciationChecker::new(&base_url)
        .check(&request())
        .await;

    assert!(matches!(result, Err(CheckerError::Service(500))));
}

#[tokio::test]
async fn given_unreachable_service_when_checking_then_reports_transport_failure() {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = HttpPronunciationChecker::new(&format!("http://{}", addr))
        .check(&request())
        .await;

    assert!(matches!(result, Err(CheckerError::Transport(_))));
}
