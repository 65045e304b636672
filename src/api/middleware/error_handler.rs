//! Converts `AppError` into HTTP responses.
//!
//! This is the single place where failures get a status code and a body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::{ErrorResponseMessage, ValidationErrorResponse};
use crate::error::AppError;

/// Maps an error to its response status.
///
/// - NotFound → 404
/// - Duplicate → 409
/// - ValidationErrors, TypeMismatch → 400
/// - Io → 500
/// - everything else → 400 carrying the raw message
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ValidationErrors { .. }
        | AppError::TypeMismatch { .. }
        | AppError::BadRequest { .. }
        | AppError::Database { .. }
        | AppError::Configuration { .. }
        | AppError::ConnectionPool { .. }
        | AppError::Internal { .. } => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        match &self {
            AppError::Io { source } => {
                tracing::error!(status = status.as_u16(), error = %source, "Request failed with I/O error")
            }
            other => {
                tracing::error!(status = status.as_u16(), error = %other.client_message(), "Request failed")
            }
        }

        if matches!(self, AppError::ValidationErrors { .. }) {
            return (status, Json(ValidationErrorResponse::new(self.messages()))).into_response();
        }

        (status, Json(ErrorResponseMessage::new(status, self.client_message()))).into_response()
    }
}
