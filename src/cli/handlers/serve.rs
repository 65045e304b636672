//! Serve command dry-run: prints the effective configuration and exits.

use crate::config::{Settings, StorageBackend};

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Prints the resolved configuration without binding a socket.
    pub fn dry_run(&self) {
        for line in self.summary() {
            println!("{line}");
        }
        println!("\n✓ Configuration is valid; server not started (--dry-run)");
    }

    fn summary(&self) -> Vec<String> {
        let cfg = &self.config;
        let mut lines = vec![
            "Configuration validation successful".to_string(),
            format!("  Application: {} v{}", cfg.application.name, cfg.application.version),
            format!("  Server address: {}", cfg.server.address()),
            format!("  Storage backend: {}", cfg.database.backend),
        ];

        if cfg.database.backend == StorageBackend::Postgres {
            lines.push(format!(
                "  Database pool: {}-{} connections, {}s timeout",
                cfg.database.min_connections,
                cfg.database.max_connections,
                cfg.database.connection_timeout
            ));
            lines.push(format!("  Auto migrate: {}", cfg.database.auto_migrate));
        }

        lines.push(format!("  Log level: {}", cfg.logger.level));
        lines.push(format!("  Console logging: {}", cfg.logger.console.enabled));
        if cfg.logger.file.enabled {
            lines.push(format!(
                "  File logging: {} ({})",
                cfg.logger.file.path, cfg.logger.file.format
            ));
        } else {
            lines.push("  File logging: false".to_string());
        }

        lines
    }
}
