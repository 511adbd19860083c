use contracts::domain::a004_device_log::aggregate::DeviceLogEntry;

use crate::shared::api_client::ApiClient;
use crate::shared::list_view::RemoteCollection;

pub fn device_logs_path(device_id: &str) -> String {
    format!("/api/devicelogs/{}", urlencoding::encode(device_id))
}

pub fn device_logs_source(client: ApiClient, device_id: &str) -> RemoteCollection<DeviceLogEntry> {
    RemoteCollection::new(client, device_logs_path(device_id), |payload, _now| {
        DeviceLogEntry::rows_from_payload(payload)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_logs_path() {
        assert_eq!(device_logs_path("pos-1"), "/api/devicelogs/pos-1");
        assert_eq!(device_logs_path("till #2"), "/api/devicelogs/till%20%232");
    }
}
