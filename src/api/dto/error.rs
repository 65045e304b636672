//! Error response bodies.

use axum::http::StatusCode;
use jiff::Timestamp;
use serde::Serialize;
use utoipa::ToSchema;

/// Body for every failure except field validation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseMessage {
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T12:00:00Z")]
    pub timestamp: Timestamp,
    #[schema(example = 404)]
    pub http_status_code: u16,
    /// Upper-case status name, e.g. `NOT_FOUND`
    #[schema(example = "NOT_FOUND")]
    pub http_status: String,
    #[schema(example = "Employee with id: 1 not found")]
    pub message: String,
}

impl ErrorResponseMessage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Timestamp::now(),
            http_status_code: status.as_u16(),
            http_status: status_name(status),
            message: message.into(),
        }
    }
}

/// Body for request-body validation failures; one message per violation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T12:00:00Z")]
    pub timestamp: Timestamp,
    #[schema(example = 400)]
    pub status_code: u16,
    #[schema(example = json!(["First name is required", "Email must be a valid email address"]))]
    pub messages: Vec<String>,
}

impl ValidationErrorResponse {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            timestamp: Timestamp::now(),
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            messages,
        }
    }
}

/// `404 Not Found` -> `NOT_FOUND`
fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::BAD_REQUEST), "BAD_REQUEST");
        assert_eq!(status_name(StatusCode::CONFLICT), "CONFLICT");
        assert_eq!(
            status_name(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn test_error_body_field_names() {
        let body = ErrorResponseMessage::new(StatusCode::NOT_FOUND, "missing");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["httpStatusCode"], 404);
        assert_eq!(json["httpStatus"], "NOT_FOUND");
        assert_eq!(json["message"], "missing");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_validation_body_field_names() {
        let body = ValidationErrorResponse::new(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["messages"], serde_json::json!(["a", "b"]));
    }
}
