//! Service layer for business logic operations.
//!
//! Services encapsulate business rules and coordinate between
//! repositories and handlers.

mod employee_service;

pub use employee_service::EmployeeService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since repositories sit behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub employees: EmployeeService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            employees: EmployeeService::new(repos.employees),
        }
    }
}
