//! Migrate command: apply, preview or revert embedded migrations.

use anyhow::anyhow;

use crate::config::{DatabaseConfig, StorageBackend};
use crate::db::{pending_migrations, revert_migrations, run_pending_migrations};
use crate::error::{AppError, AppResult};

pub struct MigrateCommandHandler {
    config: DatabaseConfig,
}

impl MigrateCommandHandler {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Runs the requested migration operation.
    ///
    /// # Errors
    /// - Configuration error when the storage backend is not postgres
    /// - Database connection or migration errors
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.ensure_postgres()?;

        if dry_run {
            return self.show_pending_migrations().await;
        }

        match rollback {
            Some(steps) => self.rollback_migrations(steps).await,
            None => self.run_migrations().await,
        }
    }

    fn ensure_postgres(&self) -> AppResult<()> {
        match self.config.backend {
            StorageBackend::Postgres => Ok(()),
            StorageBackend::Memory => Err(AppError::Configuration {
                key: "database.backend".to_string(),
                source: anyhow!("migrations require the postgres storage backend"),
            }),
        }
    }

    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let pending = pending_migrations(&self.config.url).await?;

        if pending.is_empty() {
            println!("✓ No pending migrations found - database is up to date");
        } else {
            println!("Found {} pending migration(s):", pending.len());
            for name in &pending {
                println!("  - {name}");
            }
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(())
    }

    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");

        let applied = run_pending_migrations(&self.config.url).await?;
        tracing::info!(count = applied.len(), "Applied migrations");

        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for version in &applied {
                println!("  - {version}");
            }
        }

        Ok(())
    }

    async fn rollback_migrations(&self, steps: u32) -> AppResult<()> {
        println!("Rolling back {steps} migration(s)...");

        let reverted = revert_migrations(&self.config.url, steps as usize).await?;
        tracing::info!(count = reverted.len(), "Reverted migrations");

        println!("✓ Reverted {} migration(s):", reverted.len());
        for version in &reverted {
            println!("  - {version}");
        }

        Ok(())
    }
}
