//! Typed path parameters.
//!
//! Both extractors reject with `AppError`, so a bad path parameter renders the
//! same error body as every other failure.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// The `{id}` segment decoded as an employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(pub i64);

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_employee_id(&raw).map(EmployeeId)
    }
}

/// The percent-decoded `{email}` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeEmail(pub String);

impl<S> FromRequestParts<S> for EmployeeEmail
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(email) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(EmployeeEmail(email))
    }
}

fn parse_employee_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| AppError::TypeMismatch {
        message: format!(
            "Failed to convert value of type 'String' to required type 'i64'; For input string: \"{}\"",
            raw
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employee_id() {
        assert_eq!(parse_employee_id("42").unwrap(), 42);
        assert_eq!(parse_employee_id("-1").unwrap(), -1);
    }

    #[test]
    fn test_parse_employee_id_mismatch_message() {
        let err = parse_employee_id("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to convert value of type 'String' to required type 'i64'; For input string: \"abc\""
        );

        let err = parse_employee_id("99999999999999999999").unwrap_err();
        assert!(matches!(err, AppError::TypeMismatch { .. }));
    }
}
