//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `PARKHUB__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod logging;
pub mod lot;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::lot::LotConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Every section and field carries a default, so an empty source set yields
/// a runnable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Parking lot settings.
    #[serde(default)]
    pub lot: LotConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay and
    /// environment variables prefixed with `PARKHUB__`. Missing files are
    /// skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from(Path::new("config"), env, Self::environment())
    }

    /// Load from `{dir}/default.toml`, `{dir}/{env}.toml` and the given
    /// environment source, later sources winning.
    pub fn load_from(
        dir: &Path,
        env: &str,
        environment: config::Environment,
    ) -> Result<Self, AppError> {
        let default_file = dir.join("default");
        let env_file = dir.join(env);
        let config = config::Config::builder()
            .add_source(config::File::from(default_file).required(false))
            .add_source(config::File::from(env_file).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    /// The `PARKHUB__SECTION__KEY` environment source.
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("PARKHUB")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    /// Deserialize an already-built `config::Config`.
    pub fn from_config(config: config::Config) -> Result<Self, AppError> {
        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
