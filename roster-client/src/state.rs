//! Dashboard state aggregate and its transition functions.
//!
//! All dashboard state lives in one owned [`DashboardState`]; nothing is
//! ambient or shared. Synchronous control interactions arrive as
//! [`Action`]s through [`DashboardState::apply`]. Asynchronous flows are
//! split into a begin step (validate, guard, decide what to send) and a
//! finish step, so every completed network call applies exactly one state
//! transition and a failed call leaves the collection untouched.

use std::collections::HashSet;

use roster_model::{
    CreatedUser, PageSize, PageState, RawUser, SortState, UserDraft, UserField,
};

use crate::errors::DashboardError;
use crate::store::UserStore;
use crate::view::{derive_view, FilterState, PageView};

/// A discrete user interaction with the dashboard controls.
#[derive(Debug, Clone)]
pub enum Action {
    // Search and filters
    SetSearch(String),
    SetFilter(UserField, String),
    ClearFilters,

    // Sorting (header click: same field flips direction, new field starts
    // ascending)
    SortBy(UserField),

    // Pagination
    SetPageSize(PageSize),
    PrevPage,
    NextPage,

    // Form
    SetDraftField(UserField, String),
    BeginEdit(u64),
    CancelEdit,
}

/// What a validated submit must send to the remote directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(UserDraft),
    Update(u64, UserDraft),
}

/// The whole dashboard's state.
#[derive(Debug, Default)]
pub struct DashboardState {
    store: UserStore,
    search: String,
    filters: FilterState,
    sort: SortState,
    page: PageState,
    draft: UserDraft,
    editing_id: Option<u64>,
    loading: bool,
    error: Option<DashboardError>,
    /// Ids with a mutation in flight; a second update/delete for the same
    /// id is rejected until the first completes.
    pending: HashSet<u64>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // Read accessors

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.editing_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&DashboardError> {
        self.error.as_ref()
    }

    /// The single status line shown to the operator, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|err| err.to_string())
    }

    pub fn pending_ids(&self) -> &HashSet<u64> {
        &self.pending
    }

    /// Derived view for the current inputs.
    pub fn view(&self) -> PageView {
        derive_view(
            self.store.users(),
            &self.search,
            &self.filters,
            self.sort,
            self.page,
        )
    }

    /// Apply one synchronous control interaction.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetSearch(text) => {
                self.search = text;
                self.page.current = 1;
            }
            Action::SetFilter(field, value) => {
                self.filters.set(field, value);
                self.page.current = 1;
            }
            Action::ClearFilters => {
                self.filters.clear();
                self.page.current = 1;
            }
            Action::SortBy(field) => {
                self.sort.toggle(field);
                self.page.current = 1;
            }
            // A page-size change keeps the cursor where it is; the slice at
            // that index may come back empty.
            Action::SetPageSize(size) => {
                self.page.size = size;
            }
            Action::PrevPage => {
                self.page.current = self.page.current.saturating_sub(1).max(1);
            }
            Action::NextPage => {
                self.page.current = (self.page.current + 1).min(self.view().page_count);
            }
            Action::SetDraftField(field, value) => {
                self.draft.set_field(field, value);
            }
            Action::BeginEdit(id) => {
                if let Some(record) = self.store.get(id) {
                    self.draft = UserDraft::from_record(record);
                    self.editing_id = Some(id);
                    self.error = None;
                }
            }
            Action::CancelEdit => {
                self.editing_id = None;
                self.draft.clear();
                self.error = None;
            }
        }
    }

    // Async flow: load

    /// Start the initial (or a fresh) load; clears any prior error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the completed list call.
    pub fn finish_load(&mut self, result: anyhow::Result<Vec<RawUser>>) {
        match result {
            Ok(raw) => {
                self.store.load(raw);
                self.page.current = 1;
            }
            Err(err) => {
                log::warn!("user load failed: {err:#}");
                self.error = Some(DashboardError::Load(err));
            }
        }
        self.loading = false;
    }

    // Async flow: create / update submit

    /// Validate the draft and decide what a submit must send.
    ///
    /// Returns `None` with the error surfaced when validation fails or the
    /// edited record already has a mutation in flight; no network call may
    /// be made in that case.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if let Err(err) = self.draft.validate() {
            self.error = Some(err.into());
            return None;
        }
        self.error = None;
        match self.editing_id {
            None => Some(SubmitRequest::Create(self.draft.clone())),
            Some(id) => {
                if !self.mark_pending(id) {
                    return None;
                }
                Some(SubmitRequest::Update(id, self.draft.clone()))
            }
        }
    }

    /// Apply the completed create call for the submitted draft.
    pub fn finish_create(&mut self, draft: &UserDraft, result: anyhow::Result<CreatedUser>) {
        match result {
            Ok(created) => {
                let id = self.store.append_created(draft, created.id);
                log::debug!("created user {id}");
                self.draft.clear();
                self.page.current = 1;
                self.error = None;
            }
            Err(err) => {
                log::warn!("user create failed: {err:#}");
                self.error = Some(DashboardError::Save(err));
            }
        }
    }

    /// Apply the completed update call for `id`.
    ///
    /// On failure the draft and editing target are kept, so the operator
    /// can resubmit.
    pub fn finish_update(&mut self, id: u64, draft: &UserDraft, result: anyhow::Result<()>) {
        self.pending.remove(&id);
        match result {
            Ok(()) => {
                self.store.update_in_place(id, draft);
                self.draft.clear();
                self.editing_id = None;
                self.page.current = 1;
                self.error = None;
            }
            Err(err) => {
                log::warn!("user update failed: {err:#}");
                self.error = Some(DashboardError::Save(err));
            }
        }
    }

    // Async flow: delete

    /// Start a confirmed delete. Returns false with the error surfaced when
    /// this id already has a mutation in flight.
    pub fn begin_delete(&mut self, id: u64) -> bool {
        self.mark_pending(id)
    }

    /// Apply the completed delete call for `id`.
    pub fn finish_delete(&mut self, id: u64, result: anyhow::Result<()>) {
        self.pending.remove(&id);
        match result {
            Ok(()) => {
                self.store.remove_by_id(id);
                self.page.current = 1;
                self.error = None;
            }
            Err(err) => {
                log::warn!("user delete failed: {err:#}");
                self.error = Some(DashboardError::Delete(err));
            }
        }
    }

    fn mark_pending(&mut self, id: u64) -> bool {
        if self.pending.contains(&id) {
            self.error = Some(DashboardError::MutationInFlight(id));
            return false;
        }
        self.pending.insert(id);
        true
    }
}
