//! Process-local employee repository.
//!
//! Backs the `memory` storage backend and the test suites.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EmployeeRepository;
use crate::error::{AppError, AppResult};
use crate::models::Employee;

#[derive(Debug)]
struct Store {
    employees: BTreeMap<i64, Employee>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            employees: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory employee storage.
///
/// Ids come from a monotonically increasing counter, so key order is
/// insertion order. Email uniqueness is checked under the write lock.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, employee_id: i64) -> AppResult<Option<Employee>> {
        let store = self.store.read().await;
        Ok(store.employees.get(&employee_id).cloned())
    }

    async fn find_by_email(&self, employee_email: &str) -> AppResult<Option<Employee>> {
        let store = self.store.read().await;
        Ok(store
            .employees
            .values()
            .find(|e| e.email == employee_email)
            .cloned())
    }

    async fn exists_by_email(&self, employee_email: &str) -> AppResult<bool> {
        let store = self.store.read().await;
        Ok(store.employees.values().any(|e| e.email == employee_email))
    }

    async fn save(&self, mut employee: Employee) -> AppResult<Employee> {
        let mut store = self.store.write().await;

        let taken = store
            .employees
            .values()
            .any(|e| e.email == employee.email && e.id != employee.id);
        if taken {
            return Err(AppError::duplicate("Employee", "email", &employee.email));
        }

        let employee_id = match employee.id {
            Some(existing) => {
                store.next_id = store.next_id.max(existing + 1);
                existing
            }
            None => {
                let assigned = store.next_id;
                store.next_id += 1;
                assigned
            }
        };
        employee.id = Some(employee_id);
        store.employees.insert(employee_id, employee.clone());

        tracing::debug!(employee_id, "Stored employee in memory");
        Ok(employee)
    }

    async fn delete(&self, employee: &Employee) -> AppResult<()> {
        if let Some(employee_id) = employee.id {
            self.store.write().await.employees.remove(&employee_id);
        }
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let store = self.store.read().await;
        Ok(store.employees.values().cloned().collect())
    }
}
