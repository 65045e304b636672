//! Request extractors shared by the handlers.

pub mod path;
pub mod validate;

pub use path::{EmployeeEmail, EmployeeId};
pub use validate::ValidatedJson;
