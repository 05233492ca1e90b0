//! Integration tests for the seed flow over in-memory adapters.

use std::sync::Arc;

use portfolio_site::adapters::{InMemoryProfileStore, MockImageHost};
use portfolio_site::application::{SeedError, SeedProfileCommand, SeedProfileHandler};
use portfolio_site::ports::{ImageHostError, UpsertKind};

const GALLERY: [&str; 4] = [
    "DSC_0032.JPG",
    "DSC_0037.JPG",
    "IMG-20250714-WA0064.jpg",
    "PXL_20250216_010903628.jpg",
];

fn assets(with: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("scripts").join("seed-images");
    std::fs::create_dir_all(&images).unwrap();
    for name in with {
        std::fs::write(images.join(name), b"jpeg").unwrap();
    }
    dir
}

fn all_assets() -> tempfile::TempDir {
    let mut names = vec!["IMG-20250714-WA0063.jpg"];
    names.extend(GALLERY);
    assets(&names)
}

#[tokio::test]
async fn running_twice_keeps_one_profile_in_input_order() {
    let dir = all_assets();
    let store = InMemoryProfileStore::new();
    let handler = SeedProfileHandler::new(
        Arc::new(store.clone()),
        Arc::new(MockImageHost::new()),
        dir.path(),
    );

    let first = handler.handle(SeedProfileCommand::site_owner()).await.unwrap();
    let second = handler.handle(SeedProfileCommand::site_owner()).await.unwrap();

    assert_eq!(first.kind, UpsertKind::Inserted);
    assert_eq!(second.kind, UpsertKind::Updated);

    let profiles = store.profiles();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id(), first.profile_id);
    assert_eq!(profiles[0].id(), second.profile_id);
    assert_eq!(
        profiles[0].email().as_str(),
        SeedProfileCommand::site_owner().email
    );
    let gallery = profiles[0].gallery();
    assert_eq!(gallery.len(), GALLERY.len());
    for (url, file) in gallery.iter().zip(GALLERY) {
        let stem = file.rsplit_once('.').unwrap().0;
        assert!(url.ends_with(&format!("blog_seed/{}", stem)), "{} vs {}", url, file);
    }
}

#[tokio::test]
async fn missing_assets_fall_back_to_paths_and_still_upsert() {
    let dir = assets(&[]);
    let store = InMemoryProfileStore::new();
    let host = MockImageHost::new();
    let handler =
        SeedProfileHandler::new(Arc::new(store.clone()), Arc::new(host.clone()), dir.path());

    let outcome = handler.handle(SeedProfileCommand::site_owner()).await.unwrap();

    let expected = SeedProfileCommand::site_owner();
    assert_eq!(outcome.avatar, expected.avatar_path);
    assert_eq!(outcome.gallery, expected.gallery_paths);

    let profile = &store.profiles()[0];
    assert_eq!(profile.gallery(), expected.gallery_paths.as_slice());
    assert_eq!(profile.bio(), expected.bio);
    // Only the preflight reached the image host.
    assert_eq!(host.uploads().len(), 1);
}

#[tokio::test]
async fn rejected_credentials_abort_without_touching_the_store() {
    let dir = all_assets();
    let store = InMemoryProfileStore::new();
    let host = MockImageHost::failing(ImageHostError::AuthenticationFailed(
        "Invalid Signature".to_string(),
    ));
    let handler = SeedProfileHandler::new(Arc::new(store.clone()), Arc::new(host), dir.path());

    let err = handler.handle(SeedProfileCommand::site_owner()).await.unwrap_err();

    assert!(matches!(err, SeedError::Preflight(_)));
    assert!(err.to_string().contains("Invalid Signature"));
    assert_eq!(store.connect_count(), 0);
    assert!(store.profiles().is_empty());
}
