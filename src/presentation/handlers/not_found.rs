use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::ErrorResponse;

pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
