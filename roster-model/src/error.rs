use thiserror::Error;

/// Why a form draft was rejected before any network call was made.
///
/// The display strings double as the user-facing status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of the four required fields is empty.
    #[error("All fields are required.")]
    MissingFields,

    /// The email field does not look like an address.
    #[error("Please enter a valid email.")]
    InvalidEmail,
}
