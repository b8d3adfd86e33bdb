//! Field- and record-level input validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::draft::UserDraft;
use crate::error::ValidationError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Whether `email` looks like `user@host.tld`.
///
/// Shape-only check: some non-whitespace before an `@`, then a host part
/// containing a literal dot. Empty and malformed input both fail.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Record-level validation for a form draft.
///
/// Missing fields are reported before a bad email, matching the order the
/// form surfaces problems to the operator.
pub fn validate_draft(draft: &UserDraft) -> Result<(), ValidationError> {
    if draft.first_name.is_empty()
        || draft.last_name.is_empty()
        || draft.email.is_empty()
        || draft.department.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
