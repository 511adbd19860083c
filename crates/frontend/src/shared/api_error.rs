//! Error type for every call made through [`ApiClient`](super::api_client::ApiClient).

use contracts::system::auth::ErrorBody;
use thiserror::Error;

/// Longest raw response body echoed back to the user.
const MAX_BODY_ECHO: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not authorized. Please sign in again.")]
    Unauthorized,

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Maps a non-2xx response. Bodies shaped like `{"message": "..."}`
    /// contribute their message.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty() && !trimmed.starts_with('<'))
                    .then(|| trimmed.chars().take(MAX_BODY_ECHO).collect())
            })
            .unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Status { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized() {
        let err = ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            ApiError::from_status(404, r#"{"message":"Device not found"}"#),
            ApiError::Status { status: 404, message: "Device not found".into() }
        );
        assert_eq!(
            ApiError::from_status(500, "upstream timeout"),
            ApiError::Status { status: 500, message: "upstream timeout".into() }
        );
        assert_eq!(
            ApiError::from_status(502, "<html>Bad Gateway</html>"),
            ApiError::Status { status: 502, message: "HTTP 502".into() }
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status { status: 500, message: "boom".into() };
        assert_eq!(err.to_string(), "Request failed (500): boom");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Network error: offline"
        );
    }
}
