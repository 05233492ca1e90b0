//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileReader` - Read the site's profile
//! - `ProfileRepository` - Upsert the profile keyed on email
//! - `ImageHost` - Hosted image storage
//! - `ProfileFeed` - Profile source used by the rendered page

mod image_host;
mod profile_feed;
mod profile_reader;
mod profile_repository;

pub use image_host::{ImageHost, ImageHostError, ImageUpload, UploadOptions, UploadedImage};
pub use profile_feed::{FeedError, ProfileFeed};
pub use profile_reader::ProfileReader;
pub use profile_repository::{ProfileRepository, UpsertKind, UpsertOutcome};
