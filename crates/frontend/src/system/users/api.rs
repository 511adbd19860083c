use contracts::system::users::{CreateUserDto, User};
use serde_json::Value;

use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use crate::shared::list_view::RemoteCollection;

pub const USERS_PATH: &str = "/api/auth";
pub const SIGNUP_PATH: &str = "/api/auth/signup";

pub fn user_path(id: &str) -> String {
    format!("{}/{}", USERS_PATH, urlencoding::encode(id))
}

pub fn users_source(client: ApiClient) -> RemoteCollection<User> {
    RemoteCollection::new(client, USERS_PATH, |payload, _now| User::rows_from_payload(payload))
}

/// Create new user. The response body is not needed; the list is re-fetched.
pub async fn create_user(client: &ApiClient, dto: &CreateUserDto) -> Result<(), ApiError> {
    let _: Value = client.post_json(SIGNUP_PATH, dto).await?;
    Ok(())
}

/// Delete user
pub async fn delete_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&user_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_path() {
        assert_eq!(user_path("u1"), "/api/auth/u1");
        assert_eq!(user_path("ana@tappy.io"), "/api/auth/ana%40tappy.io");
    }
}
