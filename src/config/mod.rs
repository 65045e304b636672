//! Configuration management for the employee directory.
//!
//! Settings are layered (lowest to highest priority):
//! 1. `default.toml` - base configuration (required)
//! 2. `{environment}.toml` - environment-specific overrides
//! 3. `local.toml` - local overrides, not committed
//! 4. `EMPLOYEE_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use loader::ConfigLoader;
pub use settings::{DatabaseConfig, Settings, StorageBackend};
