//! Employee request bodies.
//!
//! Fields are `Option` so a missing field is reported by `validator` as a
//! violation alongside every other one, instead of failing deserialization.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{EmployeePatch, NewEmployee};

/// Request body for creating an employee.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(
        required(message = "First name is required"),
        length(min = 1, message = "First name must not be empty")
    )]
    #[schema(example = "Michael", min_length = 1)]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Last name is required"),
        length(min = 1, message = "Last name must not be empty")
    )]
    #[schema(example = "Royf", min_length = 1)]
    pub last_name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        email(message = "Email must be a valid email address")
    )]
    #[schema(example = "michael@gmail.com", format = "email")]
    pub email: Option<String>,
}

impl CreateEmployeeRequest {
    /// Converts a validated request into the service input.
    pub fn into_new_employee(self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

/// Request body for updating an employee. `email` is accepted but ignored.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(
        required(message = "First name is required"),
        length(min = 1, message = "First name must not be empty")
    )]
    #[schema(example = "NewFirstName", min_length = 1)]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Last name is required"),
        length(min = 1, message = "Last name must not be empty")
    )]
    #[schema(example = "NewLastName", min_length = 1)]
    pub last_name: Option<String>,

    #[schema(example = "michael@gmail.com")]
    pub email: Option<String>,
}

impl UpdateEmployeeRequest {
    pub fn into_patch(self) -> EmployeePatch {
        EmployeePatch {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
        }
    }
}
