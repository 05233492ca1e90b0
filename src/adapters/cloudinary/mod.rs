//! Cloudinary adapters - hosted image storage.
//!
//! - `CloudinaryImageHost` - Signed uploads against the Cloudinary upload API
//! - `DisabledImageHost` - Used by the server when credentials are absent

mod client;
mod disabled;
mod signature;

pub use client::{CloudinaryConfig, CloudinaryImageHost};
pub use disabled::DisabledImageHost;
pub use signature::{sign, string_to_sign};
