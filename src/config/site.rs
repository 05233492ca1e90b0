//! Presentation layer configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::ServerConfig;

/// Settings for the rendered portfolio page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Base URL the page uses to reach the profile API.
    ///
    /// Defaults to the local server when unset.
    pub public_api_url: Option<String>,
}

impl SiteConfig {
    /// Base URL of the profile API, without a trailing slash.
    pub fn api_base_url(&self, server: &ServerConfig) -> String {
        match self.public_api_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => format!("http://127.0.0.1:{}", server.port),
        }
    }

    /// Validate site configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.public_api_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidPublicApiUrl)
                }
            }
            _ => Ok(()),
        }
    }
}
