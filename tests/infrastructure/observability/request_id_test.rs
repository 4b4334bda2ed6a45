use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use axum::{Extension, Router, middleware};
use http_body_util::BodyExt;
use tower::ServiceExt;

use vocalingo::infrastructure::observability::{REQUEST_ID_HEADER, RequestId, request_id_middleware};

fn echo_app() -> Router {
    Router::new()
        .route(
            "/echo",
            get(|Extension(RequestId(id)): Extension<RequestId>| async move { id }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn given_incoming_id_when_handling_then_handler_sees_same_id() {
    let response = echo_app()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header(REQUEST_ID_HEADER, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
    assert_eq!(body_text(response).await, "abc-123");
}

#[tokio::test]
async fn given_empty_incoming_id_when_handling_then_generates_uuid() {
    let response = echo_app()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header(REQUEST_ID_HEADER, "")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let header = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&header).is_ok());
    assert_eq!(body_text(response).await, header);
}
