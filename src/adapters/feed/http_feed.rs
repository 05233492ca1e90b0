//! HTTP profile feed - reads the profile through the public JSON endpoint.

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;

use crate::adapters::http::profile::ProfileResponse;
use crate::domain::profile::Profile;
use crate::ports::{FeedError, ProfileFeed};

/// Fetches `{base_url}/api/profile`, bypassing caches on every call.
#[derive(Clone)]
pub struct HttpProfileFeed {
    client: Client,
    endpoint: String,
}

impl HttpProfileFeed {
    pub fn new(base_url: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FeedError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/profile", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProfileFeed for HttpProfileFeed {
    async fn fetch(&self) -> Result<Profile, FeedError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body: ProfileResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;
        Profile::try_from(body).map_err(FeedError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::http::profile::{profile_routes, ProfileAppState};
    use crate::adapters::memory::InMemoryProfileStore;
    use crate::domain::foundation::ProfileId;
    use crate::domain::profile::ProfileDraft;

    async fn serve(store: InMemoryProfileStore) -> String {
        let app = profile_routes(ProfileAppState::new(Arc::new(store)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn endpoint_joins_base_url() {
        let feed = HttpProfileFeed::new("http://localhost:3000/").unwrap();
        assert_eq!(feed.endpoint(), "http://localhost:3000/api/profile");
    }

    #[tokio::test]
    async fn fetches_and_decodes_profile() {
        let profile = Profile::new(
            ProfileId::new(),
            ProfileDraft {
                name: "Sai Stark".to_string(),
                email: "sai@example.com".to_string(),
                gallery: vec!["https://img/a.jpg".to_string()],
                ..Default::default()
            },
        )
        .unwrap();
        let base = serve(InMemoryProfileStore::with_profile(profile.clone())).await;

        let fetched = HttpProfileFeed::new(&base).unwrap().fetch().await.unwrap();

        assert_eq!(fetched, profile);
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let base = serve(InMemoryProfileStore::new()).await;

        let err = HttpProfileFeed::new(&base).unwrap().fetch().await.unwrap_err();

        assert_eq!(err, FeedError::Status(404));
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[tokio::test]
    async fn unreachable_api_is_network_error() {
        let err = HttpProfileFeed::new("http://127.0.0.1:1")
            .unwrap()
            .fetch()
            .await
            .unwrap_err();

        assert!(matches!(err, FeedError::Network(_)));
    }
}
