//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `ConnectionManager` - Lazily established, memoized pool
//! - `PostgresProfileRepository` - Profile reads and email-keyed upserts

mod connection;
mod profile_repository;

pub use connection::{ConnectionError, ConnectionManager};
pub use profile_repository::PostgresProfileRepository;
