//! Application router - mounts every endpoint behind the shared middleware.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use http::header::CONTENT_TYPE;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::ports::{ImageHost, ProfileFeed, ProfileReader};

use super::profile::{profile_routes, ProfileAppState};
use super::site::{site_routes, SiteAppState};
use super::upload::{upload_routes, UploadAppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Port implementations the router serves.
#[derive(Clone)]
pub struct AppServices {
    pub reader: Arc<dyn ProfileReader>,
    pub image_host: Arc<dyn ImageHost>,
    pub feed: Arc<dyn ProfileFeed>,
}

fn build_cors(config: &ServerConfig) -> CorsLayer {
    let origins = config.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| tracing::warn!("Failed to parse origin '{}': {}", s, e))
                .ok()
        })
        .collect();
    layer.allow_origin(origins)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Builds the complete application router.
pub fn build_router(config: &ServerConfig, services: AppServices) -> Router {
    let request_id = http::HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(site_routes(SiteAppState::new(services.feed)))
        .merge(profile_routes(ProfileAppState::new(services.reader)))
        .merge(upload_routes(
            UploadAppState::new(services.image_host),
            config.max_upload_bytes,
        ))
        .route("/health", get(health))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(build_cors(config))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-")
                        .to_string();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
