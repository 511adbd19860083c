use contracts::usecases::u501_manual_sync::ManualSyncRequest;
use serde_json::Value;

use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;

pub const MANUAL_SYNC_PATH: &str = "/api/mannual_sync";

/// Queues a manual sync and returns the message to show the operator.
pub async fn trigger_manual_sync(
    client: &ApiClient,
    request: &ManualSyncRequest,
) -> Result<String, ApiError> {
    let response: Value = client.post_json(MANUAL_SYNC_PATH, request).await?;
    Ok(outcome_message(&response, &request.device_id))
}

/// Server `message` when present, otherwise a generic confirmation.
pub fn outcome_message(response: &Value, device_id: &str) -> String {
    response
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Manual sync requested for {}", device_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_message() {
        assert_eq!(
            outcome_message(&json!({"message": "Sync queued"}), "dev-1"),
            "Sync queued"
        );
        assert_eq!(
            outcome_message(&json!(null), "dev-1"),
            "Manual sync requested for dev-1"
        );
        assert_eq!(
            outcome_message(&json!({"message": "  "}), "dev-2"),
            "Manual sync requested for dev-2"
        );
    }
}
