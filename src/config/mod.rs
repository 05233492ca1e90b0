//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PORTFOLIO_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_site::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod image_host;
mod server;
mod site;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use image_host::{
    CredentialSource, ImageHostConfig, ImageHostCredentials, SignatureAlgorithm,
};
pub use server::{Environment, ServerConfig};
pub use site::SiteConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Hosted image service configuration (Cloudinary)
    #[serde(default)]
    pub image_host: ImageHostConfig,

    /// Rendered page configuration
    #[serde(default)]
    pub site: SiteConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PORTFOLIO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PORTFOLIO__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PORTFOLIO__DATABASE__URL=...` -> `database.url = ...`
    /// - `PORTFOLIO__IMAGE_HOST__URL=cloudinary://...` -> `image_host.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PORTFOLIO")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate what the web server needs.
    ///
    /// Image host credentials are not required here: without them only the
    /// upload endpoint is unavailable.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.site.validate()?;
        Ok(())
    }

    /// Validate what the seed tool needs: a database and image host credentials.
    pub fn validate_for_seed(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.image_host.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
