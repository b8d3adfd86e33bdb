//! Top-level dashboard controller.
//!
//! Wires the state machine to the remote directory service. Every method
//! drives one user-visible operation end to end: begin the transition,
//! await the remote call, apply the completion.

use std::sync::Arc;

use crate::service::UserDirectoryService;
use crate::state::{Action, DashboardState, SubmitRequest};
use crate::view::PageView;

/// Owns the dashboard state and the remote service.
pub struct Dashboard {
    state: DashboardState,
    service: Arc<dyn UserDirectoryService>,
}

impl Dashboard {
    pub fn new(service: Arc<dyn UserDirectoryService>) -> Self {
        Self {
            state: DashboardState::new(),
            service,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Derived view for the current inputs.
    pub fn view(&self) -> PageView {
        self.state.view()
    }

    /// Apply one synchronous control interaction.
    pub fn apply(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Load the collection from the remote directory.
    pub async fn load(&mut self) {
        self.state.begin_load();
        let result = self.service.list_users().await;
        self.state.finish_load(result);
    }

    /// Submit the form: create in create mode, update in edit mode.
    ///
    /// Validation failures surface without any network call.
    pub async fn submit(&mut self) {
        let Some(request) = self.state.begin_submit() else {
            return;
        };
        match request {
            SubmitRequest::Create(draft) => {
                let result = self.service.create_user(&draft).await;
                self.state.finish_create(&draft, result);
            }
            SubmitRequest::Update(id, draft) => {
                let result = self.service.update_user(id, &draft).await;
                self.state.finish_update(id, &draft, result);
            }
        }
    }

    /// Delete a record the operator has already confirmed. Declining the
    /// confirmation means never calling this.
    pub async fn delete_confirmed(&mut self, id: u64) {
        if !self.state.begin_delete(id) {
            return;
        }
        let result = self.service.delete_user(id).await;
        self.state.finish_delete(id, result);
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard").field("state", &self.state).finish()
    }
}
