use serde::{Deserialize, Serialize};

use crate::query::UserField;

/// Department stamped onto records the upstream source does not annotate.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// A user record as held in the canonical collection.
///
/// Field values are case-preserved; every comparison the dashboard performs
/// on them (search, filters, sorting) is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserRecord {
    /// Value of one of the four data fields, by key.
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Department => &self.department,
        }
    }
}

/// Wire shape of the upstream list endpoint: a combined `name` plus email,
/// usually without a department.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
}

impl RawUser {
    /// Annotate a raw record into collection shape.
    ///
    /// The combined name is split on the first space, with everything after
    /// it becoming the last name (empty when the name has no space). Records
    /// without a department get [`DEFAULT_DEPARTMENT`].
    pub fn into_record(self) -> UserRecord {
        let (first_name, last_name) = match self.name.split_once(' ') {
            Some((first, rest)) => (first.to_string(), rest.to_string()),
            None => (self.name.clone(), String::new()),
        };
        UserRecord {
            id: self.id,
            first_name,
            last_name,
            email: self.email,
            department: self
                .department
                .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
        }
    }
}

/// Create response from the resource endpoint.
///
/// The id is `None` when the server does not assign one; echoed fields are
/// tolerated but the dashboard rebuilds the record from the submitted draft.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str) -> RawUser {
        RawUser {
            id: 1,
            name: name.to_string(),
            email: "a@b.co".to_string(),
            department: None,
        }
    }

    #[test]
    fn name_splits_on_first_space_only() {
        let record = raw("Clementine Bauch Sr.").into_record();
        assert_eq!(record.first_name, "Clementine");
        assert_eq!(record.last_name, "Bauch Sr.");
    }

    #[test]
    fn single_token_name_leaves_last_name_empty() {
        let record = raw("Prince").into_record();
        assert_eq!(record.first_name, "Prince");
        assert_eq!(record.last_name, "");
    }

    #[test]
    fn missing_department_gets_the_default() {
        let record = raw("Ada Lovelace").into_record();
        assert_eq!(record.department, DEFAULT_DEPARTMENT);
    }

    #[test]
    fn present_department_is_preserved() {
        let mut user = raw("Ada Lovelace");
        user.department = Some("Sales".to_string());
        assert_eq!(user.into_record().department, "Sales");
    }

    #[test]
    fn raw_user_tolerates_extra_wire_fields() {
        let json = r#"{"id": 3, "name": "Jo Smith", "email": "jo@x.io",
                       "phone": "555", "website": "jo.example"}"#;
        let user: RawUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.into_record().first_name, "Jo");
    }
}
