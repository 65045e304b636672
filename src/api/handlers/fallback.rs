use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::api::dto::ErrorResponseMessage;

/// Answers requests that match no route.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    let message = format!("No handler found for {} {}", method, uri.path());
    tracing::warn!(%method, path = %uri.path(), "No handler found");

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponseMessage::new(StatusCode::NOT_FOUND, message)),
    )
        .into_response()
}
