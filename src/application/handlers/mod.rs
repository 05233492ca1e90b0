//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod image;
pub mod profile;

pub use image::{UploadImageCommand, UploadImageHandler};
pub use profile::{
    GetProfileHandler, SeedError, SeedOutcome, SeedProfileCommand, SeedProfileHandler,
};
