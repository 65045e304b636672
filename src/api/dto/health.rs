//! Health check DTOs for API responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness probe response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "ok",
    "version": "0.1.0",
    "storage": "postgres"
}))]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Application version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Configured storage backend
    #[schema(example = "postgres")]
    pub storage: String,
}
