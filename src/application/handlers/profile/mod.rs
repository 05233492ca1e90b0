//! Profile command and query handlers.

mod get_profile;
mod seed_profile;

pub use get_profile::GetProfileHandler;
pub use seed_profile::{
    resolve_asset, SeedError, SeedOutcome, SeedProfileCommand, SeedProfileHandler,
    PREFLIGHT_FOLDER, PREFLIGHT_IMAGE, PREFLIGHT_PUBLIC_ID, SEED_FOLDER,
};
