use utoipa::OpenApi;

pub const EMPLOYEE_TAG: &str = "Employee";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Directory",
        description = "CRUD service for employee records",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponseMessage,
            crate::api::dto::ValidationErrorResponse,
        )
    ),
    tags(
        (name = EMPLOYEE_TAG, description = "Employee management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
