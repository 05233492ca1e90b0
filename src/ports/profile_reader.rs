//! ProfileReader port - read side of the profile store

use async_trait::async_trait;

use crate::domain::{foundation::DomainError, profile::Profile};

/// Reads the profile served by the site.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Returns the site's profile, or `None` when the store is empty.
    ///
    /// The store holds at most one profile per email; when several exist the
    /// earliest inserted one is returned.
    async fn find_current(&self) -> Result<Option<Profile>, DomainError>;
}
