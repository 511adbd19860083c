//! Build-time configuration.
//!
//! The API origin is baked in at compile time from `TAPPY_API_BASE`
//! (e.g. `TAPPY_API_BASE=http://localhost:8080 trunk build`).

pub const DEFAULT_API_BASE: &str = "https://sync-qjwe.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_base(option_env!("TAPPY_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Trims whitespace and trailing slashes; blank falls back to the default origin.
    pub fn with_base(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let api_base = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base() {
        assert_eq!(
            AppConfig::with_base("http://localhost:8080/").api_base,
            "http://localhost:8080"
        );
        assert_eq!(AppConfig::with_base("  ").api_base, DEFAULT_API_BASE);
    }
}
