//! In-memory profile store for testing and local development.
//!
//! Implements both profile ports over a `Vec` kept in insertion order, with
//! a switch to simulate an unreachable database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::{Profile, ProfileDraft};
use crate::ports::{ProfileReader, ProfileRepository, UpsertKind, UpsertOutcome};

#[derive(Default)]
struct StoreState {
    profiles: Vec<Profile>,
    failure: Option<String>,
    reads: usize,
    connects: usize,
}

/// Thread-safe in-memory profile store.
#[derive(Clone, Default)]
pub struct InMemoryProfileStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding one profile.
    pub fn with_profile(profile: Profile) -> Self {
        let store = Self::new();
        store.lock().profiles.push(profile);
        store
    }

    /// Makes every subsequent call fail as a connection error.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Every stored profile, in insertion order.
    pub fn profiles(&self) -> Vec<Profile> {
        self.lock().profiles.clone()
    }

    /// Number of `find_current` calls served.
    pub fn read_count(&self) -> usize {
        self.lock().reads
    }

    /// Number of `connect` calls served.
    pub fn connect_count(&self) -> usize {
        self.lock().connects
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn check(state: &StoreState) -> Result<(), DomainError> {
    match &state.failure {
        Some(message) => Err(DomainError::connection(message.clone())),
        None => Ok(()),
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileStore {
    async fn find_current(&self) -> Result<Option<Profile>, DomainError> {
        let mut state = self.lock();
        check(&state)?;
        state.reads += 1;
        Ok(state.profiles.first().cloned())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn connect(&self) -> Result<(), DomainError> {
        let mut state = self.lock();
        check(&state)?;
        state.connects += 1;
        Ok(())
    }

    async fn upsert_by_email(&self, draft: &ProfileDraft) -> Result<UpsertOutcome, DomainError> {
        let email = draft.validate()?;
        let mut state = self.lock();
        check(&state)?;

        if let Some(existing) = state.profiles.iter_mut().find(|p| p.email() == &email) {
            existing.overwrite(draft.clone())?;
            return Ok(UpsertOutcome {
                profile: existing.clone(),
                kind: UpsertKind::Updated,
            });
        }

        let profile = Profile::new(ProfileId::new(), draft.clone())?;
        state.profiles.push(profile.clone());
        Ok(UpsertOutcome {
            profile,
            kind: UpsertKind::Inserted,
        })
    }
}
