use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;

/// Exchange credentials for a bearer token. Wrong credentials come back as
/// [`ApiError::Unauthorized`].
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    client.post_json("/api/auth/login", request).await
}
