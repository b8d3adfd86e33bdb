//! Pure view derivation: search, per-field filters, sort, pagination.
//!
//! `derive_view` is side-effect-free and cheap enough to re-run on every
//! input change; calling it twice with the same inputs yields the same
//! output.

use roster_model::{PageState, SortOrder, SortState, UserField, UserRecord};

/// Per-field substring constraints; an empty string means no constraint on
/// that field. Independent of the free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl FilterState {
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        let slot = match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Department => &mut self.department,
        };
        *slot = value;
    }

    /// "Clear filters": every per-field constraint back to empty. The free
    /// search text is not part of this state and stays untouched.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        UserField::all().iter().any(|field| !self.get(*field).is_empty())
    }
}

/// The derived slice of the collection currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<UserRecord>,
    pub page_count: usize,
    pub current_page: usize,
}

impl PageView {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }

    /// Page-position indicator text.
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.current_page, self.page_count)
    }
}

/// Derive the display slice for the current query inputs.
///
/// Stage order is fixed because each stage narrows the candidate set the
/// next one operates on: free-text search (OR across the four fields), then
/// per-field filters (AND), then a stable sort on the lower-cased key
/// field, then pagination. All comparisons are case-insensitive substring
/// matches. The collection itself is never mutated.
pub fn derive_view(
    users: &[UserRecord],
    search: &str,
    filters: &FilterState,
    sort: SortState,
    page: PageState,
) -> PageView {
    let mut rows: Vec<&UserRecord> = users.iter().collect();

    if !search.is_empty() {
        let needle = search.to_lowercase();
        rows.retain(|user| {
            UserField::all()
                .iter()
                .any(|field| user.field(*field).to_lowercase().contains(&needle))
        });
    }

    for &field in UserField::all() {
        let query = filters.get(field);
        if query.is_empty() {
            continue;
        }
        let needle = query.to_lowercase();
        rows.retain(|user| user.field(field).to_lowercase().contains(&needle));
    }

    if let Some(key) = sort.key {
        // Vec::sort_by is stable, so records with equal keys keep their
        // prior relative order across re-derivations.
        rows.sort_by(|a, b| {
            let left = a.field(key).to_lowercase();
            let right = b.field(key).to_lowercase();
            match sort.order {
                SortOrder::Ascending => left.cmp(&right),
                SortOrder::Descending => right.cmp(&left),
            }
        });
    }

    let size = page.size.as_usize();
    // Floors at one page so the empty result still reads "page 1 of 1".
    let page_count = rows.len().div_ceil(size).max(1);

    // `current` is 1-based; an out-of-range page yields an empty slice.
    let start = page.current.saturating_sub(1) * size;
    let items = rows.into_iter().skip(start).take(size).cloned().collect();

    PageView {
        items,
        page_count,
        current_page: page.current,
    }
}
