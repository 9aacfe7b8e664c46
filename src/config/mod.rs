//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Nested values are read with the
//! `MEDICAL_PROFILES` prefix and double underscores as separators. The plain
//! deployment variables `DATABASE_URL` and `PORT` take precedence over them.
//!
//! # Example
//!
//! ```no_run
//! use medical_profiles::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on port {}", config.server.port);
//! ```

mod database;
mod error;
mod profiles;
mod server;

pub use database::{DatabaseConfig, SslMode};
pub use error::{ConfigError, ValidationError};
pub use profiles::ProfilesConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::env;

/// Environment variable prefix for nested settings
const ENV_PREFIX: &str = "MEDICAL_PROFILES";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    ///
    /// Loads even when no URL is set; [`AppConfig::validate`] then rejects it.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Profile store configuration (display link)
    #[serde(default)]
    pub profiles: ProfilesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MEDICAL_PROFILES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Applies `DATABASE_URL` and `PORT` as overrides
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DATABASE_URL=postgres://...` -> `database.url`
    /// - `PORT=8080` -> `server.port`
    /// - `MEDICAL_PROFILES__DATABASE__MAX_CONNECTIONS=10` -> `database.max_connections = 10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.profiles.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
