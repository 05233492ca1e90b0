//! Mock image host for testing.
//!
//! Records every upload and answers with a deterministic URL built from the
//! folder and file name. Failures can be injected for every call or for
//! uploads whose file name matches.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{ImageHost, ImageHostError, ImageUpload, UploadOptions, UploadedImage};

/// One recorded call to [`MockImageHost::upload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    pub image: ImageUpload,
    pub options: UploadOptions,
}

#[derive(Default)]
struct MockState {
    uploads: Vec<RecordedUpload>,
    fail_all: Option<ImageHostError>,
    fail_names: Vec<String>,
}

/// Image host that never leaves the process.
#[derive(Clone)]
pub struct MockImageHost {
    base_url: String,
    state: Arc<Mutex<MockState>>,
}

impl MockImageHost {
    pub fn new() -> Self {
        Self {
            base_url: "https://res.cloudinary.test/demo/image/upload".to_string(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Every upload fails with `error`.
    pub fn failing(error: ImageHostError) -> Self {
        let host = Self::new();
        host.lock().fail_all = Some(error);
        host
    }

    /// Uploads of a file with this name are rejected.
    pub fn with_rejected_file(self, file_name: impl Into<String>) -> Self {
        self.lock().fail_names.push(file_name.into());
        self
    }

    /// All uploads seen so far, in call order.
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.lock().uploads.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockImageHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageHost for MockImageHost {
    async fn upload(
        &self,
        image: ImageUpload,
        options: &UploadOptions,
    ) -> Result<UploadedImage, ImageHostError> {
        let mut state = self.lock();
        state.uploads.push(RecordedUpload {
            image: image.clone(),
            options: options.clone(),
        });

        if let Some(error) = &state.fail_all {
            return Err(error.clone());
        }
        if image.is_empty() {
            return Err(ImageHostError::EmptyUpload);
        }

        let file_name = match &image {
            ImageUpload::Bytes { file_name, .. } => file_name.clone(),
            ImageUpload::DataUri(_) => None,
        };
        if let Some(name) = &file_name {
            if state.fail_names.contains(name) {
                return Err(ImageHostError::Rejected {
                    status: 400,
                    message: format!("Invalid image file {}", name),
                });
            }
        }

        let public_id = options
            .public_id
            .clone()
            .or_else(|| file_name.as_deref().map(stem))
            .unwrap_or_else(|| format!("upload_{}", state.uploads.len()));
        let public_id = match &options.folder {
            Some(folder) => format!("{}/{}", folder, public_id),
            None => public_id,
        };

        Ok(UploadedImage {
            secure_url: format!("{}/{}", self.base_url, public_id),
            public_id,
        })
    }
}

fn stem(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_url_from_folder_and_file_stem() {
        let host = MockImageHost::new();
        let uploaded = host
            .upload(
                ImageUpload::bytes(vec![1]).with_file_name("DSC_0032.JPG"),
                &UploadOptions::in_folder("blog_seed"),
            )
            .await
            .unwrap();

        assert_eq!(uploaded.public_id, "blog_seed/DSC_0032");
        assert!(uploaded.secure_url.ends_with("/blog_seed/DSC_0032"));
        assert_eq!(host.uploads().len(), 1);
    }

    #[tokio::test]
    async fn explicit_public_id_wins() {
        let host = MockImageHost::new();
        let uploaded = host
            .upload(
                ImageUpload::DataUri("data:image/png;base64,AA==".to_string()),
                &UploadOptions::in_folder("blog_seed/_preflight").with_public_id("ping"),
            )
            .await
            .unwrap();
        assert_eq!(uploaded.public_id, "blog_seed/_preflight/ping");
    }

    #[tokio::test]
    async fn injected_failures() {
        let host = MockImageHost::failing(ImageHostError::AuthenticationFailed(
            "Invalid api_key".to_string(),
        ));
        assert!(host
            .upload(ImageUpload::bytes(vec![1]), &UploadOptions::default())
            .await
            .is_err());

        let host = MockImageHost::new().with_rejected_file("bad.jpg");
        assert!(host
            .upload(
                ImageUpload::bytes(vec![1]).with_file_name("bad.jpg"),
                &UploadOptions::default()
            )
            .await
            .is_err());
        assert!(host
            .upload(
                ImageUpload::bytes(vec![1]).with_file_name("good.jpg"),
                &UploadOptions::default()
            )
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let host = MockImageHost::new();
        let err = host
            .upload(ImageUpload::bytes(Vec::new()), &UploadOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, ImageHostError::EmptyUpload);
    }
}
