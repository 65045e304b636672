//! Handlers for commands that do not start the HTTP server.

mod migrate;
mod serve;

pub use migrate::MigrateCommandHandler;
pub use serve::ServeCommandHandler;
