//! ImageHost port - hosted image storage that returns public URLs.
//!
//! Images are never stored in-process. The host receives the bytes (or a
//! data URI), stores them, and returns a durable HTTPS URL.

use async_trait::async_trait;
use thiserror::Error;

/// An image to hand over to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageUpload {
    /// Raw file contents, as received from a form or read from disk.
    Bytes {
        data: Vec<u8>,
        file_name: Option<String>,
        content_type: Option<String>,
    },
    /// A `data:` URI such as `data:image/png;base64,...`.
    DataUri(String),
}

impl ImageUpload {
    pub fn bytes(data: Vec<u8>) -> Self {
        Self::Bytes {
            data,
            file_name: None,
            content_type: None,
        }
    }

    pub fn with_file_name(self, name: impl Into<String>) -> Self {
        match self {
            Self::Bytes {
                data, content_type, ..
            } => Self::Bytes {
                data,
                file_name: Some(name.into()),
                content_type,
            },
            other => other,
        }
    }

    pub fn with_content_type(self, mime: impl Into<String>) -> Self {
        match self {
            Self::Bytes {
                data, file_name, ..
            } => Self::Bytes {
                data,
                file_name,
                content_type: Some(mime.into()),
            },
            other => other,
        }
    }

    /// True when there is nothing to upload.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes { data, .. } => data.is_empty(),
            Self::DataUri(uri) => uri.is_empty(),
        }
    }
}

/// Host-side placement options for an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    pub folder: Option<String>,
    pub public_id: Option<String>,
    pub overwrite: Option<bool>,
    pub use_filename: Option<bool>,
    pub unique_filename: Option<bool>,
}

impl UploadOptions {
    pub fn in_folder(folder: impl Into<String>) -> Self {
        Self {
            folder: Some(folder.into()),
            ..Default::default()
        }
    }

    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Keeps the original file name as the public id, without a random suffix.
    pub fn keep_file_name(mut self) -> Self {
        self.use_filename = Some(true);
        self.unique_filename = Some(false);
        self
    }
}

/// A stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub secure_url: String,
    pub public_id: String,
}

/// Failures talking to the image host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageHostError {
    /// No usable credentials were configured.
    #[error("image host not configured: {0}")]
    NotConfigured(String),

    /// The request carried nothing to upload.
    #[error("empty upload")]
    EmptyUpload,

    /// Credentials were rejected.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The host refused the upload.
    #[error("upload rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the host's response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Stores images on a hosted service.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(
        &self,
        image: ImageUpload,
        options: &UploadOptions,
    ) -> Result<UploadedImage, ImageHostError>;
}
