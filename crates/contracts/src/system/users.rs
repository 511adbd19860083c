use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::normalize::{
    display_timestamp, extract_rows, pick_bool, pick_str, pick_str_or_placeholder, pick_timestamp,
    PLACEHOLDER,
};
use crate::shared::validation::{require, require_email, ValidationError};

pub const USER_ENVELOPES: &[&str] = &["data", "users", "items"];

/// Roles offered by the create-user form.
pub const USER_ROLES: &[&str] = &["Admin", "Support"];

/// Console operator as listed by `GET /api/auth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_login: Option<DateTime<Utc>>,
    pub last_login_display: String,
    /// Position in the payload; keeps rows apart when ids repeat or are missing.
    #[serde(default)]
    pub position: usize,
}

impl User {
    pub fn from_value(record: &Value) -> Self {
        let email = pick_str_or_placeholder(record, &["email"]);
        let last_login = pick_timestamp(record, &["lastLogin", "last_login", "lastLoginAt"]);
        // The backend reports either a status string or an `isActive` flag.
        let status = pick_str(record, &["status"]).unwrap_or_else(|| {
            match pick_bool(record, &["isActive", "is_active", "active"]) {
                Some(true) => "Active".to_string(),
                Some(false) => "Disabled".to_string(),
                None => PLACEHOLDER.to_string(),
            }
        });
        Self {
            id: pick_str(record, &["id", "_id", "userId"]).unwrap_or_else(|| email.clone()),
            name: pick_str_or_placeholder(record, &["name", "fullName", "full_name", "username"]),
            email,
            role: pick_str_or_placeholder(record, &["role"]),
            status,
            last_login_display: display_timestamp(last_login.as_ref()),
            last_login,
            position: 0,
        }
    }

    pub fn rows_from_payload(payload: &Value) -> Vec<Self> {
        extract_rows(payload, USER_ENVELOPES)
            .iter()
            .enumerate()
            .map(|(position, record)| Self {
                position,
                ..Self::from_value(record)
            })
            .collect()
    }
}

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Name", &self.name)?;
        require_email("Email", &self.email)?;
        if self.password.chars().count() < 6 {
            return Err(ValidationError::Invalid {
                field: "Password",
                reason: "must be at least 6 characters",
            });
        }
        require("Role", &self.role)?;
        if !USER_ROLES.contains(&self.role.as_str()) {
            return Err(ValidationError::Invalid {
                field: "Role",
                reason: "unknown role",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_value() {
        let users = User::rows_from_payload(&json!({
            "users": [
                { "_id": "u1", "name": "Ana", "email": "ana@tappy.io", "role": "Admin", "isActive": false },
                { "email": "bo@tappy.io", "status": "Active", "lastLogin": "2024-07-19T14:22:00Z" }
            ]
        }));
        assert_eq!(users[0].id, "u1");
        assert_eq!(users[0].status, "Disabled");
        assert_eq!(users[1].id, "bo@tappy.io");
        assert_eq!(users[1].last_login_display, "19 Jul 2024, 14:22");
        assert_eq!(users[1].position, 1);
    }

    #[test]
    fn test_unreported_status_is_placeholder() {
        let user = User::from_value(&json!({ "email": "a@b.c" }));
        assert_eq!(user.status, PLACEHOLDER);

        let active = User::from_value(&json!({ "email": "a@b.c", "isActive": true }));
        assert_eq!(active.status, "Active");
    }

    #[test]
    fn test_create_user_validation() {
        let mut dto = CreateUserDto {
            name: "Ana".into(),
            email: "ana@tappy.io".into(),
            password: "12345".into(),
            role: "Admin".into(),
        };
        assert!(matches!(
            dto.validate(),
            Err(ValidationError::Invalid { field: "Password", .. })
        ));

        dto.password = "123456".into();
        assert!(dto.validate().is_ok());

        dto.role = "Root".into();
        assert!(matches!(
            dto.validate(),
            Err(ValidationError::Invalid { field: "Role", .. })
        ));

        dto.role.clear();
        assert_eq!(dto.validate(), Err(ValidationError::Required("Role")));
    }
}
