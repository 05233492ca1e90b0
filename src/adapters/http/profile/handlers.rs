//! HTTP handlers for the profile endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::GetProfileHandler;
use crate::domain::foundation::DomainError;
use crate::ports::ProfileReader;

use super::dto::{ErrorResponse, ProfileResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileAppState {
    get_handler: Arc<GetProfileHandler>,
}

impl ProfileAppState {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self {
            get_handler: Arc::new(GetProfileHandler::new(reader)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/profile - The site's profile
pub async fn get_profile(State(state): State<ProfileAppState>) -> Response {
    match state.get_handler.handle().await {
        Ok(Some(profile)) => {
            let response = ProfileResponse::from(&profile);
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found())).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

fn handle_profile_error(error: DomainError) -> Response {
    tracing::error!(code = %error.code(), error = %error, "Failed to read profile");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(error.message())),
    )
        .into_response()
}
