//! Persistence contract for employee records.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Employee;

/// Storage operations the employee service relies on.
///
/// Implementations must keep `email` unique across all records and report a
/// violation as `AppError::Duplicate`.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, employee_id: i64) -> AppResult<Option<Employee>>;

    async fn find_by_email(&self, employee_email: &str) -> AppResult<Option<Employee>>;

    async fn exists_by_email(&self, employee_email: &str) -> AppResult<bool>;

    /// Inserts when `employee.id` is `None` (storage assigns the id),
    /// otherwise writes the record under its existing id.
    async fn save(&self, employee: Employee) -> AppResult<Employee>;

    /// Removes the record with `employee.id`; a record without an id is a no-op.
    async fn delete(&self, employee: &Employee) -> AppResult<()>;

    /// Every record in storage order.
    async fn find_all(&self) -> AppResult<Vec<Employee>>;
}
