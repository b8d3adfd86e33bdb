//! UserStore - single source of truth for the user collection
//!
//! The store holds the canonical in-memory list in server return order. It
//! is mutated only after the corresponding remote call has succeeded; the
//! view pipeline reads it and never writes.

use roster_model::{RawUser, UserDraft, UserRecord};

/// Canonical in-memory user collection.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<UserRecord>,
}

impl UserStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Read-only view of the collection.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Get a record by id.
    pub fn get(&self, id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Get total count of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replace the whole collection with a fresh load, annotating raw
    /// records into collection shape (name split, default department).
    pub fn load(&mut self, raw: Vec<RawUser>) {
        self.users = raw.into_iter().map(RawUser::into_record).collect();
        log::debug!("UserStore: loaded {} users", self.users.len());
    }

    /// Add a record to the end of the collection.
    pub fn append(&mut self, record: UserRecord) {
        log::trace!("UserStore: appending user {}", record.id);
        self.users.push(record);
    }

    /// Append a record built from a submitted draft after a successful
    /// create. When the server did not assign an id, falls back to one past
    /// the highest id in the collection, which stays unique after
    /// deletions. Returns the id the record was stored under.
    pub fn append_created(&mut self, draft: &UserDraft, server_id: Option<u64>) -> u64 {
        let id = server_id.unwrap_or_else(|| self.next_local_id());
        self.append(UserRecord {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            department: draft.department.clone(),
        });
        id
    }

    /// Merge draft fields into the record with this id; no-op when absent.
    pub fn update_in_place(&mut self, id: u64, draft: &UserDraft) -> bool {
        match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                log::trace!("UserStore: updating user {id}");
                user.first_name = draft.first_name.clone();
                user.last_name = draft.last_name.clone();
                user.email = draft.email.clone();
                user.department = draft.department.clone();
                true
            }
            None => false,
        }
    }

    /// Remove the record with this id; no-op when absent.
    pub fn remove_by_id(&mut self, id: u64) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        let removed = self.users.len() != before;
        if removed {
            log::trace!("UserStore: removed user {id}");
        }
        removed
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.users.clear();
    }

    fn next_local_id(&self) -> u64 {
        self.users.iter().map(|user| user.id).max().unwrap_or(0) + 1
    }
}
