//! HTTP handler for the rendered portfolio page.

use std::sync::Arc;

use axum::{extract::State, response::Html};
use chrono::Datelike;

use crate::ports::ProfileFeed;

use super::page::{render_error_page, render_profile_page};

#[derive(Clone)]
pub struct SiteAppState {
    feed: Arc<dyn ProfileFeed>,
}

impl SiteAppState {
    pub fn new(feed: Arc<dyn ProfileFeed>) -> Self {
        Self { feed }
    }
}

/// GET / - The portfolio page
///
/// Always answers 200; a failed fetch renders an error message in place
/// of the profile.
pub async fn portfolio_page(State(state): State<SiteAppState>) -> Html<String> {
    match state.feed.fetch().await {
        Ok(profile) => Html(render_profile_page(&profile, chrono::Utc::now().year())),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load profile for page");
            Html(render_error_page(&e.to_string()))
        }
    }
}
