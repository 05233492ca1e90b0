//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Profile store on PostgreSQL
//! - `cloudinary` - Hosted image uploads
//! - `feed` - Profile feed for the rendered page
//! - `http` - Axum routes and handlers
//! - `memory` - In-memory stand-ins for tests and local runs

pub mod cloudinary;
pub mod feed;
pub mod http;
pub mod memory;
pub mod postgres;

pub use cloudinary::{CloudinaryConfig, CloudinaryImageHost, DisabledImageHost};
pub use feed::HttpProfileFeed;
pub use memory::{InMemoryProfileStore, MockImageHost};
pub use postgres::{ConnectionError, ConnectionManager, PostgresProfileRepository};
