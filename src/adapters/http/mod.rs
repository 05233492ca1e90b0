//! HTTP adapters - the JSON API, the upload proxy and the rendered page.

pub mod profile;
pub mod router;
pub mod site;
pub mod upload;

pub use profile::{profile_routes, ProfileAppState};
pub use router::{build_router, AppServices};
pub use site::{site_routes, SiteAppState};
pub use upload::{upload_routes, UploadAppState};
