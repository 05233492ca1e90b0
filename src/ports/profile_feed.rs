//! ProfileFeed port - how the rendered page obtains the profile.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::Profile;

/// Reasons the page could not obtain a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The profile API answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The profile API could not be reached.
    #[error("{0}")]
    Network(String),

    /// The profile API answered with an unreadable body.
    #[error("{0}")]
    Decode(String),
}

/// Fetches a fresh copy of the profile on every call.
#[async_trait]
pub trait ProfileFeed: Send + Sync {
    async fn fetch(&self) -> Result<Profile, FeedError>;
}
