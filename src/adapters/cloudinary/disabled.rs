//! Stand-in image host used when no credentials are configured.

use async_trait::async_trait;

use crate::ports::{ImageHost, ImageHostError, ImageUpload, UploadOptions, UploadedImage};

/// Fails every upload with the reason the real host could not be built.
#[derive(Debug, Clone)]
pub struct DisabledImageHost {
    reason: String,
}

impl DisabledImageHost {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ImageHost for DisabledImageHost {
    async fn upload(
        &self,
        _image: ImageUpload,
        _options: &UploadOptions,
    ) -> Result<UploadedImage, ImageHostError> {
        Err(ImageHostError::NotConfigured(self.reason.clone()))
    }
}
