use chrono::Utc;
use contracts::domain::a002_device::aggregate::{Device, DeviceStatus};
use contracts::domain::a003_sync_log::aggregate::SyncSummary;

use crate::domain::{a001_tenant, a002_device, a003_sync_log};
use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use crate::shared::list_view::CollectionSource;

/// Device totals with the online/offline split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceCounts {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
}

impl DeviceCounts {
    pub fn from_devices(devices: &[Device]) -> Self {
        let online = devices
            .iter()
            .filter(|d| d.status == DeviceStatus::Online)
            .count();
        Self {
            total: devices.len(),
            online,
            offline: devices.len() - online,
        }
    }
}

pub async fn fetch_tenant_count(client: ApiClient) -> Result<usize, ApiError> {
    let tenants = a001_tenant::api::tenants_source(client).fetch().await?;
    Ok(tenants.len())
}

pub async fn fetch_device_counts(client: ApiClient) -> Result<DeviceCounts, ApiError> {
    let devices = a002_device::api::devices_source(client).fetch().await?;
    Ok(DeviceCounts::from_devices(&devices))
}

pub async fn fetch_sync_summary(client: ApiClient) -> Result<SyncSummary, ApiError> {
    let entries = a003_sync_log::api::sync_logs_source(client).fetch().await?;
    Ok(SyncSummary::compute(&entries, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};
    use serde_json::json;

    #[test]
    fn test_device_counts_split_by_status() {
        let now = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let seen = |minutes: i64| (now - Duration::minutes(minutes)).to_rfc3339();
        let payload = json!([
            {"deviceId": "a", "lastUpdated": seen(5)},
            {"deviceId": "b", "lastUpdated": seen(30)},
            {"deviceId": "c", "lastUpdated": seen(90)},
            {"deviceId": "d"},
        ]);
        let devices = Device::rows_from_payload(&payload, now);
        assert_eq!(
            DeviceCounts::from_devices(&devices),
            DeviceCounts { total: 4, online: 2, offline: 2 }
        );
    }

    #[test]
    fn test_empty_fleet() {
        assert_eq!(DeviceCounts::from_devices(&[]), DeviceCounts::default());
    }
}
