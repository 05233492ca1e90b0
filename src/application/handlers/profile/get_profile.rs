//! GetProfile - Query handler for the site's single profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::Profile;
use crate::ports::ProfileReader;

/// Handler for reading the current profile.
///
/// Reads through to the store on every call; nothing is cached.
pub struct GetProfileHandler {
    reader: Arc<dyn ProfileReader>,
}

impl GetProfileHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Option<Profile>, DomainError> {
        self.reader.find_current().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileStore;
    use crate::domain::foundation::{ErrorCode, ProfileId};
    use crate::domain::profile::ProfileDraft;
    use crate::ports::ProfileRepository;

    fn draft(name: &str, email: &str) -> ProfileDraft {
        ProfileDraft {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn returns_none_when_store_is_empty() {
        let handler = GetProfileHandler::new(Arc::new(InMemoryProfileStore::new()));
        assert!(handler.handle().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn returns_first_stored_profile() {
        let store = InMemoryProfileStore::new();
        store.upsert_by_email(&draft("First", "first@example.com")).await.unwrap();
        store.upsert_by_email(&draft("Second", "second@example.com")).await.unwrap();

        let handler = GetProfileHandler::new(Arc::new(store));
        let profile = handler.handle().await.unwrap().unwrap();
        assert_eq!(profile.name(), "First");
    }

    #[tokio::test]
    async fn reads_fresh_data_each_call() {
        let profile = Profile::new(ProfileId::new(), draft("Old", "sai@example.com")).unwrap();
        let store = InMemoryProfileStore::with_profile(profile);
        let handler = GetProfileHandler::new(Arc::new(store.clone()));

        assert_eq!(handler.handle().await.unwrap().unwrap().name(), "Old");
        store.upsert_by_email(&draft("New", "sai@example.com")).await.unwrap();
        assert_eq!(handler.handle().await.unwrap().unwrap().name(), "New");
        assert_eq!(store.read_count(), 2);
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let store = InMemoryProfileStore::new();
        store.fail_with("connection refused");
        let handler = GetProfileHandler::new(Arc::new(store));

        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConnectionFailed);
    }
}
