//! Application state for the Axum router.

use crate::config::StorageBackend;
use crate::repositories::Repositories;
use crate::services::Services;

/// Shared services handed to every handler.
///
/// Cloning is cheap since repositories sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Backend the repositories were built for
    pub storage: StorageBackend,
}

impl AppState {
    /// Builds services on top of the given repositories.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(Repositories::postgres(pool), StorageBackend::Postgres);
    /// ```
    pub fn new(repos: Repositories, storage: StorageBackend) -> Self {
        Self {
            services: Services::new(repos),
            storage,
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory(), StorageBackend::Memory)
    }
}
