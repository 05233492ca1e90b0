//! HTTP DTOs for the profile endpoint.
//!
//! The wire shape keeps the record identifier under `_id`; every other
//! field uses its plain name.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProfileId;
use crate::domain::profile::{Profile, ProfileDraft};

// ════════════════════════════════════════════════════════════════════════════
// Response types
// ════════════════════════════════════════════════════════════════════════════

/// Serialized profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            name: profile.name().to_string(),
            email: profile.email().to_string(),
            bio: profile.bio().to_string(),
            instagram: profile.instagram().to_string(),
            whatsapp: profile.whatsapp().to_string(),
            avatar: profile.avatar().to_string(),
            gallery: profile.gallery().to_vec(),
        }
    }
}

impl TryFrom<ProfileResponse> for Profile {
    type Error = String;

    fn try_from(response: ProfileResponse) -> Result<Self, Self::Error> {
        let id: ProfileId = response
            .id
            .parse()
            .map_err(|e| format!("invalid _id {}: {}", response.id, e))?;
        let draft = ProfileDraft {
            name: response.name,
            email: response.email,
            bio: response.bio,
            instagram: response.instagram,
            whatsapp: response.whatsapp,
            avatar: response.avatar,
            gallery: response.gallery,
        };
        Profile::new(id, draft).map_err(|e| e.to_string())
    }
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("Profile not found")
    }
}
