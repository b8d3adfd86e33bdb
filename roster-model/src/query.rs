use std::fmt;

/// The four data fields of a user record, as shown in the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Department,
}

impl UserField {
    pub fn all() -> &'static [UserField] {
        use UserField::*;
        &[FirstName, LastName, Email, Department]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserField::FirstName => "First Name",
            UserField::LastName => "Last Name",
            UserField::Email => "Email",
            UserField::Department => "Department",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Current table sorting. No key means collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<UserField>,
    pub order: SortOrder,
}

impl SortState {
    /// Header-click semantics: clicking the sorted column flips its
    /// direction, clicking a different column sorts it ascending.
    pub fn toggle(&mut self, field: UserField) {
        if self.key == Some(field) {
            self.order = self.order.toggled();
        } else {
            self.key = Some(field);
            self.order = SortOrder::Ascending;
        }
    }
}

/// Fixed page-size options offered by the dashboard selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub fn all() -> &'static [PageSize] {
        use PageSize::*;
        &[Ten, TwentyFive, Fifty, Hundred]
    }

    pub fn as_usize(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// 1-based pagination cursor plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub size: PageSize,
    pub current: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            size: PageSize::default(),
            current: 1,
        }
    }
}
