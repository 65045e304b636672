//! Data Transfer Objects for API requests and responses.
//!
//! - `employee` - employee request bodies
//! - `error` - error response bodies
//! - `health` - health probe response

mod employee;
mod error;
mod health;

pub use employee::{CreateEmployeeRequest, UpdateEmployeeRequest};
pub use error::{ErrorResponseMessage, ValidationErrorResponse};
pub use health::HealthResponse;
