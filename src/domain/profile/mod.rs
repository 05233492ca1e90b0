//! Profile module - the single portfolio record.

mod email;
mod record;

pub use email::Email;
pub use record::{Profile, ProfileDraft};
