//! ProfileRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::{
    foundation::DomainError,
    profile::{Profile, ProfileDraft},
};

/// Whether an upsert created the record or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertKind {
    Inserted,
    Updated,
}

/// Result of an upsert keyed on email.
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    pub profile: Profile,
    pub kind: UpsertKind,
}

/// Write side of the profile store.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Establishes the underlying connection ahead of the first write.
    ///
    /// Idempotent. Stores that need no connection keep the default.
    async fn connect(&self) -> Result<(), DomainError> {
        Ok(())
    }

    /// Inserts the profile, or overwrites every field of the profile that
    /// already has the draft's email. The draft must be valid.
    async fn upsert_by_email(&self, draft: &ProfileDraft) -> Result<UpsertOutcome, DomainError>;
}
