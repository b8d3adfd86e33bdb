//! Core data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod draft;
pub mod error;
pub mod query;
pub mod user;
pub mod validate;

// Intentionally curated re-exports for downstream consumers.
pub use draft::UserDraft;
pub use error::ValidationError;
pub use query::{PageSize, PageState, SortOrder, SortState, UserField};
pub use user::{CreatedUser, RawUser, UserRecord, DEFAULT_DEPARTMENT};
pub use validate::{is_valid_email, validate_draft};
