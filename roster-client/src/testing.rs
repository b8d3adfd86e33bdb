//! In-memory test double for the directory service.
//!
//! Keeps its own user list behind an `Arc<RwLock<_>>`, counts every call,
//! and can be told to fail individual operations, so tests can assert both
//! the state transitions and that no network call was made.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use roster_model::{CreatedUser, RawUser, UserDraft};

use crate::service::UserDirectoryService;

/// Remote operations the stub can count and fail on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryOp {
    List,
    Create,
    Update,
    Delete,
}

/// In-memory [`UserDirectoryService`] stub.
#[derive(Debug, Clone, Default)]
pub struct TestDirectoryService {
    inner: Arc<RwLock<InnerDirectoryState>>,
}

#[derive(Debug)]
struct InnerDirectoryState {
    users: Vec<RawUser>,
    next_id: u64,
    assign_ids: bool,
    failing: HashSet<DirectoryOp>,
    calls: HashMap<DirectoryOp, usize>,
}

impl Default for InnerDirectoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
            assign_ids: true,
            failing: HashSet::new(),
            calls: HashMap::new(),
        }
    }
}

impl TestDirectoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the server-side user list and advance the id counter past
    /// the highest seeded id.
    pub fn seed_users(&self, users: Vec<RawUser>) {
        let mut guard = self.inner.write().expect("directory stub lock poisoned");
        guard.next_id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        guard.users = users;
    }

    /// When false, create responses omit the assigned id, exercising the
    /// client-side fallback.
    pub fn set_assign_ids(&self, assign: bool) {
        let mut guard = self.inner.write().expect("directory stub lock poisoned");
        guard.assign_ids = assign;
    }

    /// Make one operation fail until turned off again.
    pub fn set_failing(&self, op: DirectoryOp, failing: bool) {
        let mut guard = self.inner.write().expect("directory stub lock poisoned");
        if failing {
            guard.failing.insert(op);
        } else {
            guard.failing.remove(&op);
        }
    }

    /// How many times one operation was called.
    pub fn calls(&self, op: DirectoryOp) -> usize {
        let guard = self.inner.read().expect("directory stub lock poisoned");
        guard.calls.get(&op).copied().unwrap_or(0)
    }

    /// Snapshot of the server-side user list.
    pub fn users_snapshot(&self) -> Vec<RawUser> {
        let guard = self.inner.read().expect("directory stub lock poisoned");
        guard.users.clone()
    }

    fn record_call(guard: &mut InnerDirectoryState, op: DirectoryOp) -> Result<()> {
        *guard.calls.entry(op).or_insert(0) += 1;
        if guard.failing.contains(&op) {
            return Err(anyhow!("stub: {op:?} failure injected"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectoryService for TestDirectoryService {
    async fn list_users(&self) -> Result<Vec<RawUser>> {
        let mut guard = self.inner.write().expect("directory stub lock poisoned");
        Self::record_call(&mut guard, DirectoryOp::List)?;
        Ok(guard.users.clone())
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<CreatedUser> {
        let mut guard = self.inner.write().expect("directory stub lock poisoned");
        Self::record_call(&mut guard, DirectoryOp::Create)?;

        let assigned = if guard.assign_ids {
            let id = guard.next_id;
            guard.next_id += 1;
            guard.users.push(RawUser {
                id,
                name: format!("{} {}", draft.first_name, draft.last_name),
                email: draft.email.clone(),
                department: Some(draft.department.clone()),
            });
            Some(id)
        } else {
            None
        };

        Ok(CreatedUser {
            id: assigned,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            department: draft.department.clone(),
        })
    }

    async fn update_user(&self, id: u64, draft: &UserDraft) -> Result<()> {
        let mut guard = self.inner.write().expect("directory stub lock poisoned");
        Self::record_call(&mut guard, DirectoryOp::Update)?;
        if let Some(user) = guard.users.iter_mut().find(|user| user.id == id) {
            user.name = format!("{} {}", draft.first_name, draft.last_name);
            user.email = draft.email.clone();
            user.department = Some(draft.department.clone());
        }
        Ok(())
    }

    async fn delete_user(&self, id: u64) -> Result<()> {
        let mut guard = self.inner.write().expect("directory stub lock poisoned");
        Self::record_call(&mut guard, DirectoryOp::Delete)?;
        guard.users.retain(|user| user.id != id);
        Ok(())
    }
}
