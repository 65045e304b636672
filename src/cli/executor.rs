//! Dispatches parsed CLI commands.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::server::Server;

/// Runs the command selected on the command line; no subcommand means `serve`.
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => {
            ServeCommandHandler::new(settings).dry_run();
            Ok(())
        }
        Some(Commands::Serve { .. }) | None => Server::new(settings).run().await,
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings.database)
                .execute(*dry_run, *rollback)
                .await?;
            Ok(())
        }
    }
}
