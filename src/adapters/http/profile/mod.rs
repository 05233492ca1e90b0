//! Profile HTTP adapter - the JSON read endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, ProfileResponse};
pub use handlers::ProfileAppState;
pub use routes::profile_routes;
