mod employee;
mod message;

pub use employee::{
    Employee, EmployeeChangeset, EmployeePatch, EmployeeRow, NewEmployee, NewEmployeeRow,
};
pub use message::MessageResponse;
