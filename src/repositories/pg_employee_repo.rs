//! PostgreSQL employee repository.
//!
//! Runs every query against the `employees` table through diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::EmployeeRepository;
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{Employee, EmployeeChangeset, EmployeeRow, NewEmployeeRow};

/// Employee repository holding an async connection pool.
///
/// `AsyncDbPool` is `Arc`-backed, so cloning the repository is cheap.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: AsyncDbPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_id(&self, employee_id: i64) -> AppResult<Option<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        let row = employees
            .find(employee_id)
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)?;

        Ok(row.map(Employee::from))
    }

    async fn find_by_email(&self, employee_email: &str) -> AppResult<Option<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        let row = employees
            .filter(email.eq(employee_email))
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)?;

        Ok(row.map(Employee::from))
    }

    async fn exists_by_email(&self, employee_email: &str) -> AppResult<bool> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::select(diesel::dsl::exists(
            employees.filter(email.eq(employee_email)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(AppError::from)
    }

    async fn save(&self, employee: Employee) -> AppResult<Employee> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        let row = match employee.id {
            None => diesel::insert_into(employees)
                .values(NewEmployeeRow::from(&employee))
                .returning(EmployeeRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert employee"))?,
            Some(employee_id) => diesel::insert_into(employees)
                .values((
                    id.eq(employee_id),
                    first_name.eq(&employee.first_name),
                    last_name.eq(&employee.last_name),
                    email.eq(&employee.email),
                ))
                .on_conflict(id)
                .do_update()
                .set(EmployeeChangeset::from(&employee))
                .returning(EmployeeRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update employee"))?,
        };

        Ok(Employee::from(row))
    }

    async fn delete(&self, employee: &Employee) -> AppResult<()> {
        use crate::schema::employees::dsl::*;

        let Some(employee_id) = employee.id else {
            return Ok(());
        };
        let mut conn = self.pool.get().await?;

        diesel::delete(employees.find(employee_id))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete employee"))?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        use crate::schema::employees::dsl::*;
        let mut conn = self.pool.get().await?;

        let rows = employees
            .order(id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}
