//! SeedProfile - Command handler that populates the site's profile.
//!
//! Runs once per invocation of the `seed` binary:
//!
//! 1. Preflight upload of a 1x1 PNG to prove the image host credentials work
//! 2. Connect to the profile store
//! 3. Upload the avatar, then each gallery image in order
//! 4. Upsert the profile keyed on email
//!
//! A missing or unuploadable image file is not an error. Its entry keeps the
//! original path string so the rest of the profile is still written.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ProfileId, ValidationError};
use crate::domain::profile::ProfileDraft;
use crate::ports::{
    ImageHost, ImageHostError, ImageUpload, ProfileRepository, UploadOptions, UpsertKind,
};

/// 1x1 transparent PNG used to check credentials.
pub const PREFLIGHT_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mP8/x8AAuMBgq3Qeb0AAAAASUVORK5CYII=";
pub const PREFLIGHT_FOLDER: &str = "blog_seed/_preflight";
pub const PREFLIGHT_PUBLIC_ID: &str = "ping";
pub const SEED_FOLDER: &str = "blog_seed";

/// The profile content to seed, with image entries as local paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedProfileCommand {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub instagram: String,
    pub whatsapp: String,
    pub avatar_path: String,
    pub gallery_paths: Vec<String>,
}

impl SeedProfileCommand {
    /// The site owner's profile.
    pub fn site_owner() -> Self {
        Self {
            name: "Sai Stark".to_string(),
            email: "dharmasaisingarapu051@gmail.com".to_string(),
            bio: "Welcome to My Bucket List! I'm Sai Stark, an avid traveler and adventure seeker. This is my personal space to share my dreams, experiences, and the places I aspire to visit.".to_string(),
            instagram: "https://www.instagram.com/sai._.stark?igsh=eTRuNWF0OGppd2w2".to_string(),
            whatsapp: "https://wa.me/919391953591".to_string(),
            avatar_path: "/scripts/seed-images/IMG-20250714-WA0063.jpg".to_string(),
            gallery_paths: vec![
                "/scripts/seed-images/DSC_0032.JPG".to_string(),
                "/scripts/seed-images/DSC_0037.JPG".to_string(),
                "/scripts/seed-images/IMG-20250714-WA0064.jpg".to_string(),
                "/scripts/seed-images/PXL_20250216_010903628.jpg".to_string(),
            ],
        }
    }
}

/// Result of a successful seed run.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    pub profile_id: ProfileId,
    pub kind: UpsertKind,
    pub preflight_url: String,
    pub avatar: String,
    pub gallery: Vec<String>,
}

/// Failures that abort a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("image host preflight failed: {0}")]
    Preflight(#[source] ImageHostError),

    #[error("database connection failed: {0}")]
    Connection(#[source] DomainError),

    #[error("invalid profile: {0}")]
    Validation(#[from] ValidationError),

    #[error("profile upsert failed: {0}")]
    Persist(#[source] DomainError),
}

/// Handler for seeding the profile.
pub struct SeedProfileHandler {
    repository: Arc<dyn ProfileRepository>,
    image_host: Arc<dyn ImageHost>,
    assets_root: PathBuf,
}

impl SeedProfileHandler {
    /// `assets_root` is the directory seed paths are resolved against,
    /// normally the working directory.
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        image_host: Arc<dyn ImageHost>,
        assets_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repository,
            image_host,
            assets_root: assets_root.into(),
        }
    }

    pub async fn handle(&self, cmd: SeedProfileCommand) -> Result<SeedOutcome, SeedError> {
        // 1. Credentials check
        let preflight = self
            .image_host
            .upload(
                ImageUpload::DataUri(PREFLIGHT_IMAGE.to_string()),
                &UploadOptions::in_folder(PREFLIGHT_FOLDER)
                    .with_public_id(PREFLIGHT_PUBLIC_ID)
                    .with_overwrite(true),
            )
            .await
            .map_err(SeedError::Preflight)?;
        tracing::info!(url = %preflight.secure_url, "Image host preflight ok");

        // 2. Connect
        self.repository
            .connect()
            .await
            .map_err(SeedError::Connection)?;
        tracing::info!("Connected to profile store");

        // 3. Images, strictly one at a time
        let avatar = self.upload_if_exists(&cmd.avatar_path).await;
        let mut gallery = Vec::with_capacity(cmd.gallery_paths.len());
        for path in &cmd.gallery_paths {
            gallery.push(self.upload_if_exists(path).await);
        }

        // 4. Upsert
        let draft = ProfileDraft {
            name: cmd.name,
            email: cmd.email,
            bio: cmd.bio,
            instagram: cmd.instagram,
            whatsapp: cmd.whatsapp,
            avatar: avatar.clone(),
            gallery: gallery.clone(),
        };
        draft.validate()?;

        let outcome = self
            .repository
            .upsert_by_email(&draft)
            .await
            .map_err(SeedError::Persist)?;
        tracing::info!(
            profile_id = %outcome.profile.id(),
            kind = ?outcome.kind,
            "Seed complete, profile upserted"
        );

        Ok(SeedOutcome {
            profile_id: outcome.profile.id(),
            kind: outcome.kind,
            preflight_url: preflight.secure_url,
            avatar,
            gallery,
        })
    }

    /// Uploads the file at `input` and returns its URL, or `input` itself
    /// when the file is missing or the upload fails.
    async fn upload_if_exists(&self, input: &str) -> String {
        let path = resolve_asset(&self.assets_root, input);
        tracing::info!(path = %path.display(), "Resolved seed asset");

        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "File not found, keeping path");
                return input.to_string();
            }
        };

        let mut image = ImageUpload::bytes(data);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            image = image.with_file_name(name);
        }
        if let Some(mime) = content_type_for(&path) {
            image = image.with_content_type(mime);
        }

        let options = UploadOptions::in_folder(SEED_FOLDER).keep_file_name();
        match self.image_host.upload(image, &options).await {
            Ok(uploaded) => {
                tracing::info!(url = %uploaded.secure_url, "Uploaded seed asset");
                uploaded.secure_url
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Upload failed, keeping path");
                input.to_string()
            }
        }
    }
}

/// Resolves a seed path against `root`, accepting `/scripts/..` and
/// `\scripts\..` forms alike.
pub fn resolve_asset(root: &Path, input: &str) -> PathBuf {
    let trimmed = input.trim_start_matches(['/', '\\']);
    trimmed
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
