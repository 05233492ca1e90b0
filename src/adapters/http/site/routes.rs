//! HTTP routes for the rendered page.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use super::handlers::{portfolio_page, SiteAppState};

/// Creates the page router. The page is rendered fresh for every request
/// and never cached.
pub fn site_routes(state: SiteAppState) -> Router {
    Router::new()
        .route("/", get(portfolio_page))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, max-age=0"),
        ))
        .with_state(state)
}
