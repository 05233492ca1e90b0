//! UploadImage - Command handler that forwards one image to the image host.

use std::sync::Arc;

use crate::ports::{ImageHost, ImageHostError, ImageUpload, UploadOptions, UploadedImage};

/// A file received from a client.
#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub data: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

/// Handler for proxying uploads. The resulting URL is returned to the
/// caller and not stored anywhere.
pub struct UploadImageHandler {
    image_host: Arc<dyn ImageHost>,
}

impl UploadImageHandler {
    pub fn new(image_host: Arc<dyn ImageHost>) -> Self {
        Self { image_host }
    }

    pub async fn handle(&self, cmd: UploadImageCommand) -> Result<UploadedImage, ImageHostError> {
        if cmd.data.is_empty() {
            return Err(ImageHostError::EmptyUpload);
        }

        let mut image = ImageUpload::bytes(cmd.data);
        if let Some(name) = cmd.file_name {
            image = image.with_file_name(name);
        }
        if let Some(mime) = cmd.content_type {
            image = image.with_content_type(mime);
        }

        // Host defaults decide folder and public id.
        self.image_host.upload(image, &UploadOptions::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MockImageHost;

    fn command(data: &[u8]) -> UploadImageCommand {
        UploadImageCommand {
            data: data.to_vec(),
            file_name: Some("beach.jpg".to_string()),
            content_type: Some("image/jpeg".to_string()),
        }
    }

    #[tokio::test]
    async fn returns_hosted_url() {
        let host = MockImageHost::new();
        let handler = UploadImageHandler::new(Arc::new(host.clone()));

        let uploaded = handler.handle(command(b"jpeg")).await.unwrap();

        assert!(uploaded.secure_url.starts_with("https://"));
        assert_eq!(host.uploads().len(), 1);
        assert_eq!(
            host.uploads()[0].image,
            ImageUpload::bytes(b"jpeg".to_vec())
                .with_file_name("beach.jpg")
                .with_content_type("image/jpeg")
        );
    }

    #[tokio::test]
    async fn empty_file_is_rejected_without_upload() {
        let host = MockImageHost::new();
        let handler = UploadImageHandler::new(Arc::new(host.clone()));

        let err = handler.handle(command(b"")).await.unwrap_err();

        assert_eq!(err, ImageHostError::EmptyUpload);
        assert!(host.uploads().is_empty());
    }

    #[tokio::test]
    async fn uses_host_default_placement() {
        let host = MockImageHost::new();
        let handler = UploadImageHandler::new(Arc::new(host.clone()));

        let uploaded = handler.handle(command(b"jpeg")).await.unwrap();

        assert_eq!(uploaded.public_id, "beach");
        assert_eq!(host.uploads()[0].options, UploadOptions::default());
    }

    #[tokio::test]
    async fn propagates_host_failure() {
        let host = MockImageHost::failing(ImageHostError::Network("timeout".to_string()));
        let handler = UploadImageHandler::new(Arc::new(host));

        let err = handler.handle(command(b"jpeg")).await.unwrap_err();
        assert!(matches!(err, ImageHostError::Network(_)));
    }
}
