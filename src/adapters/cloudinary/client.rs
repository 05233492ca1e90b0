//! Cloudinary image host - Implementation of ImageHost over the upload API.
//!
//! # Configuration
//!
//! ```ignore
//! let credentials = app_config.image_host.credentials()?;
//! let host = CloudinaryImageHost::new(CloudinaryConfig::new(&app_config.image_host, credentials))?;
//!
//! let uploaded = host.upload(ImageUpload::bytes(data), &UploadOptions::in_folder("blog_seed")).await?;
//! println!("{}", uploaded.secure_url);
//! ```
//!
//! Uploads are signed requests against
//! `{api_base_url}/{cloud_name}/image/upload`.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use super::signature::sign;
use crate::config::{ImageHostConfig, ImageHostCredentials, SignatureAlgorithm};
use crate::ports::{ImageHost, ImageHostError, ImageUpload, UploadOptions, UploadedImage};

/// Configuration for the Cloudinary image host.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    api_secret: Secret<String>,
    /// Base URL for the API (default: https://api.cloudinary.com/v1_1).
    pub base_url: String,
    pub signature_algorithm: SignatureAlgorithm,
    pub timeout: Duration,
}

impl CloudinaryConfig {
    /// Combines resolved credentials with the transport settings.
    pub fn new(settings: &ImageHostConfig, credentials: ImageHostCredentials) -> Self {
        Self {
            cloud_name: credentials.cloud_name,
            api_key: credentials.api_key,
            api_secret: credentials.api_secret,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            signature_algorithm: settings.signature_algorithm,
            timeout: settings.timeout(),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

/// Cloudinary upload API client.
pub struct CloudinaryImageHost {
    config: CloudinaryConfig,
    client: Client,
}

impl CloudinaryImageHost {
    pub fn new(config: CloudinaryConfig) -> Result<Self, ImageHostError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ImageHostError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the image upload endpoint URL.
    fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.config.base_url, self.config.cloud_name)
    }

    /// Signed parameters for one upload, timestamp included.
    fn signed_params(&self, options: &UploadOptions, timestamp: i64) -> BTreeMap<String, String> {
        let mut params = option_params(options);
        params.insert("timestamp".to_string(), timestamp.to_string());
        let signature = sign(&params, self.config.api_secret(), self.config.signature_algorithm);
        params.insert("api_key".to_string(), self.config.api_key.clone());
        params.insert("signature".to_string(), signature);
        params
    }

    fn build_form(
        &self,
        image: ImageUpload,
        params: BTreeMap<String, String>,
    ) -> Result<Form, ImageHostError> {
        let mut form = Form::new();
        for (key, value) in params {
            form = form.text(key, value);
        }

        let form = match image {
            ImageUpload::DataUri(uri) => form.text("file", uri),
            ImageUpload::Bytes {
                data,
                file_name,
                content_type,
            } => {
                let mut part = Part::bytes(data)
                    .file_name(file_name.unwrap_or_else(|| "upload".to_string()));
                if let Some(mime) = content_type {
                    part = part.mime_str(&mime).map_err(|e| {
                        ImageHostError::Rejected {
                            status: 400,
                            message: format!("Invalid content type {}: {}", mime, e),
                        }
                    })?;
                }
                form.part("file", part)
            }
        };
        Ok(form)
    }

    async fn send(&self, form: Form) -> Result<Response, ImageHostError> {
        self.client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ImageHostError::Network(format!(
                        "Request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    ImageHostError::Network(format!("Connection failed: {}", e))
                } else {
                    ImageHostError::Network(e.to_string())
                }
            })
    }

    /// Maps the response status and body to an upload result.
    async fn handle_response(response: Response) -> Result<UploadedImage, ImageHostError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ImageHostError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = error_message(&body);
            return Err(match status.as_u16() {
                401 | 403 => ImageHostError::AuthenticationFailed(message),
                code => ImageHostError::Rejected {
                    status: code,
                    message,
                },
            });
        }

        let parsed: UploadResponse =
            serde_json::from_str(&body).map_err(|e| ImageHostError::Parse(e.to_string()))?;
        if parsed.secure_url.is_empty() {
            return Err(ImageHostError::Parse("response has no secure_url".to_string()));
        }
        Ok(UploadedImage {
            secure_url: parsed.secure_url,
            public_id: parsed.public_id,
        })
    }
}

#[async_trait]
impl ImageHost for CloudinaryImageHost {
    async fn upload(
        &self,
        image: ImageUpload,
        options: &UploadOptions,
    ) -> Result<UploadedImage, ImageHostError> {
        if image.is_empty() {
            return Err(ImageHostError::EmptyUpload);
        }

        let params = self.signed_params(options, chrono::Utc::now().timestamp());
        let form = self.build_form(image, params)?;

        tracing::debug!(folder = ?options.folder, "Uploading image to Cloudinary");
        let uploaded = Self::handle_response(self.send(form).await?).await?;
        tracing::debug!(public_id = %uploaded.public_id, "Image uploaded");
        Ok(uploaded)
    }
}

/// Placement options as upload API parameters.
fn option_params(options: &UploadOptions) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    if let Some(folder) = &options.folder {
        params.insert("folder".to_string(), folder.clone());
    }
    if let Some(public_id) = &options.public_id {
        params.insert("public_id".to_string(), public_id.clone());
    }
    let flags = [
        ("overwrite", options.overwrite),
        ("use_filename", options.use_filename),
        ("unique_filename", options.unique_filename),
    ];
    for (name, value) in flags {
        if let Some(value) = value {
            params.insert(name.to_string(), value.to_string());
        }
    }
    params
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: String,
    #[serde(default)]
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
