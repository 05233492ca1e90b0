//! HTTP routes for the profile endpoint.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use super::handlers::{get_profile, ProfileAppState};

/// Creates the profile router. Responses are always marked `no-store`.
pub fn profile_routes(state: ProfileAppState) -> Router {
    Router::new()
        .route("/api/profile", get(get_profile))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, max-age=0"),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::memory::InMemoryProfileStore;
    use crate::domain::foundation::ProfileId;
    use crate::domain::profile::{Profile, ProfileDraft};

    fn request() -> Request<Body> {
        Request::builder()
            .uri("/api/profile")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn stored_profile() -> Profile {
        Profile::new(
            ProfileId::new(),
            ProfileDraft {
                name: "Sai Stark".to_string(),
                email: "sai@example.com".to_string(),
                bio: "Traveler".to_string(),
                gallery: vec!["https://img/a.jpg".to_string(), "https://img/b.jpg".to_string()],
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_stored_profile_with_no_store() {
        let profile = stored_profile();
        let store = InMemoryProfileStore::with_profile(profile.clone());
        let app = profile_routes(ProfileAppState::new(Arc::new(store)));

        let response = app.oneshot(request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store, max-age=0"
        );
        let json = body_json(response).await;
        assert_eq!(json["_id"], profile.id().to_string());
        assert_eq!(json["bio"], "Traveler");
        assert_eq!(json["gallery"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_store_is_not_found() {
        let app = profile_routes(ProfileAppState::new(Arc::new(InMemoryProfileStore::new())));

        let response = app.oneshot(request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(header::CACHE_CONTROL));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"error":"Profile not found"}"#);
    }

    #[tokio::test]
    async fn store_failure_is_internal_error_with_message() {
        let store = InMemoryProfileStore::new();
        store.fail_with("database unreachable: connection refused");
        let app = profile_routes(ProfileAppState::new(Arc::new(store)));

        let response = app.oneshot(request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "database unreachable: connection refused");
    }

    #[tokio::test]
    async fn every_request_reads_the_store() {
        let store = InMemoryProfileStore::with_profile(stored_profile());
        let app = profile_routes(ProfileAppState::new(Arc::new(store.clone())));

        app.clone().oneshot(request()).await.unwrap();
        app.oneshot(request()).await.unwrap();

        assert_eq!(store.read_count(), 2);
    }
}
