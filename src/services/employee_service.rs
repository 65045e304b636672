//! Employee service for business logic operations.
//!
//! Enforces the employee invariants (unique email, existence before
//! mutation) on top of any `EmployeeRepository`.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Employee, EmployeePatch, MessageResponse, NewEmployee};
use crate::repositories::EmployeeRepository;

const ENTITY: &str = "Employee";

/// Employee service for handling employee-related business logic.
///
/// Holds the repository behind an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a new EmployeeService with the given repository.
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new employee.
    ///
    /// # Arguments
    /// * `new_employee` - The employee data to create
    ///
    /// # Returns
    /// The stored employee with its generated id, or `Duplicate` if the email
    /// is already taken
    pub async fn create(&self, new_employee: NewEmployee) -> AppResult<Employee> {
        let employee_email = new_employee.email.clone();

        if self.repo.exists_by_email(&employee_email).await? {
            tracing::info!(email = %employee_email, "Rejected employee with taken email");
            return Err(AppError::duplicate(ENTITY, "email", &employee_email));
        }

        // A concurrent insert can still win the race; storage reports it as a
        // duplicate on the email column.
        let created = self
            .repo
            .save(Employee::from(new_employee))
            .await
            .map_err(|e| match e {
                AppError::Duplicate { field, .. } if field == "email" => {
                    AppError::duplicate(ENTITY, "email", &employee_email)
                }
                other => other,
            })?;

        tracing::info!(employee_id = ?created.id, "Created employee");
        Ok(created)
    }

    /// Lists every employee in storage order.
    pub async fn list_all(&self) -> AppResult<Vec<Employee>> {
        let employees = self.repo.find_all().await?;
        tracing::debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    /// Gets an employee by id.
    ///
    /// # Returns
    /// The employee if found, or `NotFound` error
    pub async fn get_by_id(&self, employee_id: i64) -> AppResult<Employee> {
        tracing::debug!(employee_id, "Fetching employee by id");
        self.repo
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, "id", employee_id))
    }

    /// Gets an employee by email address.
    ///
    /// # Returns
    /// The employee if found, or `NotFound` error
    pub async fn get_by_email(&self, employee_email: &str) -> AppResult<Employee> {
        tracing::debug!(email = %employee_email, "Fetching employee by email");
        self.repo
            .find_by_email(employee_email)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, "email", employee_email))
    }

    /// Replaces the names of an existing employee.
    ///
    /// Email and id are kept as stored.
    ///
    /// # Arguments
    /// * `employee_id` - The employee's id
    /// * `patch` - The new first and last name
    pub async fn update(&self, employee_id: i64, patch: EmployeePatch) -> AppResult<Employee> {
        let mut employee = self.get_by_id(employee_id).await?;
        employee.first_name = patch.first_name;
        employee.last_name = patch.last_name;

        let updated = self.repo.save(employee).await?;
        tracing::info!(employee_id, "Updated employee");
        Ok(updated)
    }

    /// Deletes an existing employee.
    ///
    /// # Returns
    /// A confirmation message, or `NotFound` error
    pub async fn delete(&self, employee_id: i64) -> AppResult<MessageResponse> {
        let employee = self.get_by_id(employee_id).await?;
        self.repo.delete(&employee).await?;

        tracing::info!(employee_id, "Deleted employee");
        Ok(MessageResponse::new(format!(
            "Employee with id: {} was deleted",
            employee_id
        )))
    }
}
