//! Repository layer for employee persistence.
//!
//! `EmployeeRepository` is the storage contract; PostgreSQL and in-memory
//! implementations are selected at startup.

mod employee_repo;
mod memory_employee_repo;
mod pg_employee_repo;

pub use employee_repo::EmployeeRepository;
pub use memory_employee_repo::InMemoryEmployeeRepository;
pub use pg_employee_repo::PgEmployeeRepository;

use std::sync::Arc;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct Repositories {
    pub employees: Arc<dyn EmployeeRepository>,
}

impl Repositories {
    /// Repositories backed by PostgreSQL.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn postgres(pool: AsyncDbPool) -> Self {
        Self {
            employees: Arc::new(PgEmployeeRepository::new(pool)),
        }
    }

    /// Repositories backed by process memory.
    pub fn in_memory() -> Self {
        Self {
            employees: Arc::new(InMemoryEmployeeRepository::new()),
        }
    }
}
