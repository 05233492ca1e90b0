//! Hosted image service configuration (Cloudinary)

use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

/// Image host configuration.
///
/// Credentials come either from one combined URL
/// (`cloudinary://<api_key>:<api_secret>@<cloud_name>`) or from the three
/// discrete values. The combined URL wins when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageHostConfig {
    /// Combined credential URL
    pub url: Option<Secret<String>>,

    /// Cloud (account) name
    pub cloud_name: Option<String>,

    /// API key
    pub api_key: Option<String>,

    /// API secret
    pub api_secret: Option<Secret<String>>,

    /// Upload API base, without the cloud name
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Digest used to sign upload requests
    #[serde(default)]
    pub signature_algorithm: SignatureAlgorithm,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Digest used for request signatures.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

/// Where resolved credentials came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    CombinedUrl,
    Discrete,
}

/// Fully resolved image host credentials.
#[derive(Clone)]
pub struct ImageHostCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: Secret<String>,
    pub source: CredentialSource,
}

impl ImageHostCredentials {
    /// Log-safe description: the secret is never included and the key is masked.
    pub fn describe(&self) -> String {
        match self.source {
            CredentialSource::CombinedUrl => format!(
                "combined URL cloudinary://{}:***@{}",
                self.api_key, self.cloud_name
            ),
            CredentialSource::Discrete => format!(
                "explicit vars name={}, key={}",
                self.cloud_name,
                mask(&self.api_key)
            ),
        }
    }

    pub fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl fmt::Debug for ImageHostCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHostCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &mask(&self.api_key))
            .field("api_secret", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

impl ImageHostConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve credentials from the combined URL or the discrete values.
    pub fn credentials(&self) -> Result<ImageHostCredentials, ValidationError> {
        if let Some(url) = self.url.as_ref().filter(|u| !u.expose_secret().trim().is_empty()) {
            return parse_combined_url(url.expose_secret());
        }

        let cloud_name = non_empty(self.cloud_name.as_deref())
            .ok_or(ValidationError::MissingRequired("IMAGE_HOST__CLOUD_NAME"))?;
        let api_key = non_empty(self.api_key.as_deref())
            .ok_or(ValidationError::MissingRequired("IMAGE_HOST__API_KEY"))?;
        let api_secret = self
            .api_secret
            .as_ref()
            .filter(|s| !s.expose_secret().trim().is_empty())
            .ok_or(ValidationError::MissingRequired("IMAGE_HOST__API_SECRET"))?;

        Ok(ImageHostCredentials {
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.clone(),
            source: CredentialSource::Discrete,
        })
    }

    /// Validate image host configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.credentials()?;
        if !self.api_base_url.starts_with("https://") && !self.api_base_url.starts_with("http://")
        {
            return Err(ValidationError::InvalidImageHostUrl("API base must be http(s)"));
        }
        Ok(())
    }
}

impl Default for ImageHostConfig {
    fn default() -> Self {
        Self {
            url: None,
            cloud_name: None,
            api_key: None,
            api_secret: None,
            api_base_url: default_api_base_url(),
            signature_algorithm: SignatureAlgorithm::default(),
            timeout_secs: default_timeout(),
        }
    }
}

fn parse_combined_url(raw: &str) -> Result<ImageHostCredentials, ValidationError> {
    let url = Url::parse(raw.trim())
        .map_err(|_| ValidationError::InvalidImageHostUrl("not a URL"))?;
    if url.scheme() != "cloudinary" {
        return Err(ValidationError::InvalidImageHostUrl(
            "scheme must be cloudinary://",
        ));
    }
    let api_key = non_empty(Some(url.username()))
        .ok_or(ValidationError::InvalidImageHostUrl("missing API key"))?;
    let api_secret = non_empty(url.password())
        .ok_or(ValidationError::InvalidImageHostUrl("missing API secret"))?;
    let cloud_name = non_empty(url.host_str())
        .ok_or(ValidationError::InvalidImageHostUrl("missing cloud name"))?;

    Ok(ImageHostCredentials {
        cloud_name: cloud_name.to_string(),
        api_key: api_key.to_string(),
        api_secret: Secret::new(api_secret.to_string()),
        source: CredentialSource::CombinedUrl,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// First four characters followed by the total length.
pub(crate) fn mask(value: &str) -> String {
    let prefix: String = value.chars().take(4).collect();
    format!("{}…({})", prefix, value.chars().count())
}

fn default_api_base_url() -> String {
    "https://api.cloudinary.com/v1_1".to_string()
}

fn default_timeout() -> u64 {
    60
}
