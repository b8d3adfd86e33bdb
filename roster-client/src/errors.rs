//! Dashboard error types
//!
//! One `thiserror` taxonomy per failure surface. A `DashboardError`'s
//! display string is exactly the status line the operator sees; only one is
//! shown at a time and any successful operation clears it.

use reqwest::StatusCode;
use thiserror::Error;

pub use roster_model::ValidationError;

/// Errors from the typed HTTP client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read or decode).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// One dashboard operation's failure.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Initial fetch failed; the collection stays empty.
    #[error("Failed to load users.")]
    Load(#[source] anyhow::Error),

    /// The form draft was rejected; no network call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Create or update call failed; draft and collection are unchanged.
    #[error("Failed to save user.")]
    Save(#[source] anyhow::Error),

    /// Delete call failed; the collection is unchanged.
    #[error("Failed to delete user.")]
    Delete(#[source] anyhow::Error),

    /// A second mutation was attempted for a record whose previous
    /// update/delete has not completed yet.
    #[error("Another change for user {0} is still pending.")]
    MutationInFlight(u64),
}
