use serde::Serialize;

use crate::error::ValidationError;
use crate::query::UserField;
use crate::user::UserRecord;
use crate::validate;

/// Working copy of the add/edit form fields before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserDraft {
    /// Draft pre-filled from an existing record, for edit mode.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            department: record.department.clone(),
        }
    }

    pub fn field_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Department => &mut self.department,
        }
    }

    pub fn set_field(&mut self, field: UserField, value: String) {
        *self.field_mut(field) = value;
    }

    /// Reset to the empty draft.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record-level validation: all four fields present, email well formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::validate_draft(self)
    }
}
