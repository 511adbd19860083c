use serde::{Deserialize, Serialize};

use crate::shared::validation::{require, require_email, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_email("Email", &self.email)?;
        require("Password", &self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Shape of the backend's non-2xx bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let mut request = LoginRequest::default();
        assert_eq!(request.validate(), Err(ValidationError::Required("Email")));

        request.email = "ops@tappy.io".into();
        assert_eq!(request.validate(), Err(ValidationError::Required("Password")));

        request.password = "secret".into();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid credentials"));

        let body: ErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("boom"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message(), None);
    }
}
