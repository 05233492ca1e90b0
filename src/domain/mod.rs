//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `profile` - The portfolio profile record and its validation

pub mod foundation;
pub mod profile;
