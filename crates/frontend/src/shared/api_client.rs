//! Thin HTTP client for the Tappy REST API.
//!
//! A client is built from the current session, so the bearer token is
//! injected explicitly instead of being read from storage on every call.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Value of the `Authorization` header, when the session holds a token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let request = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(response.status(), &body));
        }
        Ok(())
    }
}

async fn read_response<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        log::warn!("HTTP {} from {}", status, response.url());
        return Err(ApiError::from_status(status, &body));
    }
    decode_body(&body)
}

/// Parses a response body; an empty body decodes as JSON `null`.
pub fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
