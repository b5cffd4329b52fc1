//! # Employee records as the backend exchanges them
//!
//! Three shapes cross the wire, all camelCase JSON:
//!
//! | Type | Used for | Notes |
//! |------|----------|-------|
//! | [`Employee`] | `GET /employee`, `GET /employee/{id}` responses | `password` may or may not be present. |
//! | [`NewEmployee`] | `POST /employee/create` body | No `id`, the backend assigns it. |
//! | [`EmployeeUpdate`] | `PUT /employee/update/{id}` body | Carries `id`; `password` only when it changes. |
//!
//! [`PasswordChange`] is the edit form's password intent. A blank field means
//! [`PasswordChange::Keep`], which omits the key from the update body so the
//! backend keeps the stored value. A password returned on read is never fed
//! back into an update.

use serde::{Deserialize, Serialize, Serializer};

/// An employee as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Employee {
    /// "First Last", for dialogs and log lines.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the backend leaked password data into this record.
    pub fn exposes_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub password: String,
}

/// What to do with the stored password on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PasswordChange {
    /// Leave the stored password untouched.
    #[default]
    Keep,
    /// Replace it with a new value.
    Set(String),
}

impl PasswordChange {
    /// Interpret the edit form's password field. Blank means keep.
    pub fn from_input(input: &str) -> Self {
        if input.trim().is_empty() {
            Self::Keep
        } else {
            Self::Set(input.to_string())
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl Serialize for PasswordChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Keep => serializer.serialize_none(),
            Self::Set(password) => serializer.serialize_str(password),
        }
    }
}

/// Body of an update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    #[serde(skip_serializing_if = "PasswordChange::is_keep")]
    pub password: PasswordChange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_without_password() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "mail": "ada@x.io"
        }))
        .unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(employee.first_name, "Ada");
        assert_eq!(employee.last_name, "Lovelace");
        assert_eq!(employee.mail, "ada@x.io");
        assert_eq!(employee.password, None);
        assert!(!employee.exposes_password());
        assert_eq!(employee.full_name(), "Ada Lovelace");
    }

    #[test]
    fn null_password_decodes_as_absent() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 2, "firstName": "A", "lastName": "B", "mail": "a@b.c", "password": null
        }))
        .unwrap();
        assert_eq!(employee.password, None);
    }

    #[test]
    fn echoed_password_is_flagged() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 3, "firstName": "A", "lastName": "B", "mail": "a@b.c", "password": "hunter2"
        }))
        .unwrap();
        assert!(employee.exposes_password());
    }

    #[test]
    fn new_employee_has_no_id() {
        let body = serde_json::to_value(NewEmployee {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            mail: "grace@navy.mil".into(),
            password: "cobol".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "firstName": "Grace",
                "lastName": "Hopper",
                "mail": "grace@navy.mil",
                "password": "cobol"
            })
        );
    }

    #[test]
    fn update_omits_kept_password() {
        let update = EmployeeUpdate {
            id: 42,
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            mail: "alan@bletchley.uk".into(),
            password: PasswordChange::from_input("  "),
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 42,
                "firstName": "Alan",
                "lastName": "Turing",
                "mail": "alan@bletchley.uk"
            })
        );
    }

    #[test]
    fn update_sends_new_password() {
        let update = EmployeeUpdate {
            id: 42,
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            mail: "alan@bletchley.uk".into(),
            password: PasswordChange::from_input("enigma"),
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["password"], "enigma");
    }
}
