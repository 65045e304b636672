use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An employee record as seen by the service and returned to clients.
///
/// `id` is `None` until storage has assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Michael")]
    pub first_name: String,
    #[schema(example = "Royf")]
    pub last_name: String,
    #[schema(example = "michael@gmail.com")]
    pub email: String,
}

/// Input for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<NewEmployee> for Employee {
    fn from(new: NewEmployee) -> Self {
        Self {
            id: None,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
        }
    }
}

/// Replacement names for an existing employee; email and id are never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePatch {
    pub first_name: String,
    pub last_name: String,
}

/// Employee row for reading from the `employees` table
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}

/// Row for INSERT; the id comes from the BIGSERIAL sequence
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a Employee> for NewEmployeeRow<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            first_name: &employee.first_name,
            last_name: &employee.last_name,
            email: &employee.email,
        }
    }
}

/// Full-row UPDATE of the mutable columns
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::employees)]
pub struct EmployeeChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a Employee> for EmployeeChangeset<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            first_name: &employee.first_name,
            last_name: &employee.last_name,
            email: &employee.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_json_uses_camel_case() {
        let employee = Employee {
            id: Some(7),
            first_name: "Michael".to_string(),
            last_name: "Royf".to_string(),
            email: "michael@gmail.com".to_string(),
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "firstName": "Michael",
                "lastName": "Royf",
                "email": "michael@gmail.com"
            })
        );
    }

    #[test]
    fn test_new_employee_has_no_id() {
        let employee: Employee = NewEmployee {
            first_name: "Anna".to_string(),
            last_name: "Smith".to_string(),
            email: "anna@gmail.com".to_string(),
        }
        .into();
        assert_eq!(employee.id, None);
        assert_eq!(employee.email, "anna@gmail.com");
    }
}
