//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section; every section has defaults so an empty environment still
//! yields a usable development configuration.

pub mod app;
pub mod database;
pub mod explorer;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, StoreBackend};
pub use self::explorer::ExplorerConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Conventional variables that override the `database` section.
const DATABASE_ENV_OVERRIDES: [(&str, &str); 5] = [
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_NAME", "database.name"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Item tree settings.
    #[serde(default)]
    pub explorer: ExplorerConfig,
}

impl AppConfig {
    /// Load configuration for the given environment from the `config/`
    /// directory.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration from `base` (a file path without extension), the
    /// sibling `{env}` overlay, `EXPLORER__*` variables, and finally the
    /// `DB_*` variables.
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let overlay = std::path::Path::new(base)
            .with_file_name(env)
            .to_string_lossy()
            .into_owned();

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&overlay).required(false))
            .add_source(
                config::Environment::with_prefix("EXPLORER")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in DATABASE_ENV_OVERRIDES {
            builder = builder.set_override_option(key, std::env::var(var).ok())?;
        }

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_yield_defaults() {
        let config = AppConfig::load_from("does/not/exist/default", "test").unwrap();
        assert_eq!(config.explorer.root_path(), "home/");
        assert_eq!(config.explorer.system_identity, "system");
        assert_eq!(config.server.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_environment_overlay() {
        let config = AppConfig::load_from("../../config/default", "test").unwrap();
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.server.port, 3000);
    }
}
