//! Shared fixtures and helpers for roster-client integration tests.
#![allow(dead_code)]

use std::sync::Once;

use roster_model::{RawUser, UserDraft, UserRecord};

static INIT: Once = Once::new();

/// Initialize env_logger once per test binary.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn raw_user(id: u64, name: &str, email: &str) -> RawUser {
    RawUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        department: None,
    }
}

pub fn record(id: u64, first: &str, last: &str, email: &str, department: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}

pub fn draft(first: &str, last: &str, email: &str, department: &str) -> UserDraft {
    UserDraft {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}
