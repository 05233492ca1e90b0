//! In-memory adapters for tests and local development.

mod image_host;
mod profile_store;

pub use image_host::{MockImageHost, RecordedUpload};
pub use profile_store::InMemoryProfileStore;
