//! Site HTTP adapter - the server-rendered portfolio page.

pub mod handlers;
pub mod page;
pub mod routes;

pub use handlers::SiteAppState;
pub use routes::site_routes;
