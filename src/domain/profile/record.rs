//! The portfolio profile record and its unvalidated input form.

use serde::{Deserialize, Serialize};

use super::Email;
use crate::domain::foundation::{ProfileId, ValidationError};

/// Profile fields as supplied by a writer, before validation.
///
/// Every optional field defaults to empty, so partially populated JSON
/// deserializes into a usable draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub instagram: String,
    pub whatsapp: String,
    pub avatar: String,
    pub gallery: Vec<String>,
}

impl ProfileDraft {
    /// Checks the required fields and returns the validated natural key.
    pub fn validate(&self) -> Result<Email, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Email::new(self.email.clone())
    }
}

/// The single portfolio record served by the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    id: ProfileId,
    name: String,
    email: Email,
    bio: String,
    instagram: String,
    whatsapp: String,
    avatar: String,
    gallery: Vec<String>,
}

impl Profile {
    /// Builds a profile from a draft, rejecting an empty name or a bad email.
    pub fn new(id: ProfileId, draft: ProfileDraft) -> Result<Self, ValidationError> {
        let email = draft.validate()?;
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            email,
            bio: draft.bio,
            instagram: draft.instagram,
            whatsapp: draft.whatsapp,
            avatar: draft.avatar,
            gallery: draft.gallery,
        })
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn instagram(&self) -> &str {
        &self.instagram
    }

    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Gallery entries in their stored order.
    pub fn gallery(&self) -> &[String] {
        &self.gallery
    }

    /// Replaces every writable field, keeping the identifier.
    pub fn overwrite(&mut self, draft: ProfileDraft) -> Result<(), ValidationError> {
        *self = Profile::new(self.id, draft)?;
        Ok(())
    }
}
