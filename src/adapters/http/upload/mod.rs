//! Upload HTTP adapter - multipart proxy to the image host.

pub mod handlers;
pub mod routes;

pub use handlers::{UploadAppState, UploadResponse, UPLOAD_FAILED};
pub use routes::upload_routes;
