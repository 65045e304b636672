//! HTTP API layer: handlers, middleware, DTOs and the OpenAPI document.

pub mod doc;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
