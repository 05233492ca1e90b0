//! Profile store connection settings.
//!
//! Read from `PORTFOLIO__DATABASE__*`. The server and the seed binary share
//! one small pool; the server only ever reads a single row and the seed
//! writes one, so the defaults stay low.

use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings handed to `ConnectionManager`, which opens the pool on the
/// first store call rather than at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PORTFOLIO__DATABASE__URL`. May be empty for the server, which then
    /// answers profile reads with a connection error.
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long the first profile read waits for a connection.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Apply `migrations/` (the `profiles` table) when the pool opens.
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// `host:port/database` of the URL, without user or password, for logs.
    pub fn target(&self) -> String {
        match Url::parse(self.url.trim()) {
            Ok(url) => format!(
                "{}:{}{}",
                url.host_str().unwrap_or("localhost"),
                url.port().unwrap_or(5432),
                url.path()
            ),
            Err(_) => "<unparsed>".to_string(),
        }
    }

    /// Checked by both binaries before anything connects.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_url() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: false,
        }
    }
}

// Lazily opened pool, so an idle server holds no connections.
fn default_min_connections() -> u32 {
    0
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    10
}
