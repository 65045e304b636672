//! Merges CLI overrides into the file-based configuration.
//!
//! Precedence, highest first: CLI arguments, `EMPLOYEE_*` variables,
//! configuration files.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base configuration honouring `--config` and `--env`.
    ///
    /// # Errors
    /// Returns `ConfigError` if loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path);
        }
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        Ok(Self::new(loader.load()?))
    }

    /// Applies CLI overrides and validates the result.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            // Command-level log level wins over --verbose/--quiet.
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;

        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageBackend;
    use clap::Parser;

    fn base_config() -> Settings {
        let mut config = Settings::default();
        config.database.backend = StorageBackend::Memory;
        config
    }

    fn merge(args: &[&str]) -> Result<Settings, ConfigError> {
        let cli = Cli::try_parse_from(args).unwrap();
        ConfigurationMerger::new(base_config()).merge_cli_args(&cli)
    }

    #[test]
    fn test_global_verbosity_flags() {
        assert_eq!(merge(&["employee-directory", "--verbose"]).unwrap().logger.level, "debug");
        assert_eq!(merge(&["employee-directory", "--quiet"]).unwrap().logger.level, "error");
    }

    #[test]
    fn test_serve_overrides() {
        let merged = merge(&[
            "employee-directory",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9090",
        ])
        .unwrap();

        assert_eq!(merged.server.host, "0.0.0.0");
        assert_eq!(merged.server.port, 9090);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merged = merge(&[
            "employee-directory",
            "--verbose",
            "serve",
            "--log-level",
            "warn",
        ])
        .unwrap();
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_migrate_leaves_server_untouched() {
        let merged = merge(&["employee-directory", "migrate"]).unwrap();
        assert_eq!(merged.server, base_config().server);
    }

    #[test]
    fn test_merged_config_is_validated() {
        let cli = Cli::try_parse_from(["employee-directory"]).unwrap();
        let mut invalid = base_config();
        invalid.logger.level = "loud".to_string();

        let err = ConfigurationMerger::new(invalid).merge_cli_args(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "logger.level"));
    }
}
