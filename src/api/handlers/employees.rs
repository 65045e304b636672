//! Employee CRUD request handlers.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::EMPLOYEE_TAG;
use crate::api::dto::{
    CreateEmployeeRequest, ErrorResponseMessage, UpdateEmployeeRequest, ValidationErrorResponse,
};
use crate::error::AppResult;
use crate::models::{Employee, MessageResponse};
use crate::state::AppState;
use crate::utils::{EmployeeEmail, EmployeeId, ValidatedJson};

/// Creates employee routes, mounted under `/api/v1`.
///
/// Routes:
/// - POST   /employee               - Create an employee
/// - GET    /employee               - List all employees
/// - GET    /employee/id/{id}       - Get employee by id
/// - PUT    /employee/id/{id}       - Replace employee names
/// - DELETE /employee/id/{id}       - Delete employee
/// - GET    /employee/email/{email} - Get employee by email
pub fn employee_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_employee, list_employees))
        .routes(routes!(get_employee, update_employee, delete_employee))
        .routes(routes!(get_employee_by_email))
}

/// POST /api/v1/employee - Create an employee
///
/// Returns 201 Created with the stored employee, including its generated id.
#[utoipa::path(
    post,
    path = "/employee",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid request body", body = ValidationErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponseMessage)
    )
)]
async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state
        .services
        .employees
        .create(payload.into_new_employee())
        .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/employee - List all employees
#[utoipa::path(
    get,
    path = "/employee",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>)
    )
)]
async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list_all().await?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/id/{id} - Get employee by id
#[utoipa::path(
    get,
    path = "/employee/id/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 400, description = "Id is not a number", body = ErrorResponseMessage),
        (status = 404, description = "Employee not found", body = ErrorResponseMessage)
    )
)]
async fn get_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<Json<Employee>> {
    let employee = state.services.employees.get_by_id(id).await?;
    Ok(Json(employee))
}

/// GET /api/v1/employee/email/{email} - Get employee by email
#[utoipa::path(
    get,
    path = "/employee/email/{email}",
    tag = EMPLOYEE_TAG,
    params(("email" = String, Path, description = "Employee email")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponseMessage)
    )
)]
async fn get_employee_by_email(
    State(state): State<AppState>,
    EmployeeEmail(email): EmployeeEmail,
) -> AppResult<Json<Employee>> {
    let employee = state.services.employees.get_by_email(&email).await?;
    Ok(Json(employee))
}

/// PUT /api/v1/employee/id/{id} - Replace employee names
///
/// Only `firstName` and `lastName` are applied; the stored email is kept.
#[utoipa::path(
    put,
    path = "/employee/id/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = i64, Path, description = "Employee id")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponseMessage)
    )
)]
async fn update_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .services
        .employees
        .update(id, payload.into_patch())
        .await?;
    Ok(Json(employee))
}

/// DELETE /api/v1/employee/id/{id} - Delete employee
#[utoipa::path(
    delete,
    path = "/employee/id/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found", body = ErrorResponseMessage)
    )
)]
async fn delete_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<Json<MessageResponse>> {
    let message = state.services.employees.delete(id).await?;
    Ok(Json(message))
}
