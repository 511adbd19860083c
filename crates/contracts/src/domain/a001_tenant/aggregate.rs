use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::normalize::{
    display_timestamp, extract_rows, pick_str, pick_str_or_placeholder, pick_timestamp, pick_u64,
};

pub const TENANT_ENVELOPES: &[&str] = &["data", "plans", "tenants", "items"];

/// Tenant row built from `GET /api/plans`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub tenant_id: String,
    pub name: String,
    pub subscription: String,
    pub erp: String,
    pub last_sync: Option<DateTime<Utc>>,
    pub last_sync_display: String,
    pub online_devices: u64,
    pub offline_devices: u64,
    /// Position in the payload; keeps rows apart when ids repeat or are missing.
    #[serde(default)]
    pub position: usize,
}

impl Tenant {
    pub fn from_value(record: &Value) -> Self {
        let tenant_id = pick_str_or_placeholder(record, &["tenantId", "tenant_id", "id", "_id"]);
        let name = pick_str(record, &["name", "tenantName", "tenant_name", "planName", "plan_name"])
            .unwrap_or_else(|| tenant_id.clone());
        let last_sync = pick_timestamp(
            record,
            &["lastSync", "last_sync", "updatedAt", "updated_at", "createdAt"],
        );
        Self {
            tenant_id,
            name,
            subscription: pick_str_or_placeholder(
                record,
                &["subscription", "subscriptionStatus", "status", "plan"],
            ),
            erp: pick_str_or_placeholder(record, &["erp", "erpType", "erp_type"]),
            last_sync_display: display_timestamp(last_sync.as_ref()),
            last_sync,
            online_devices: pick_u64(record, &["onlineDevices", "online_devices", "online"])
                .unwrap_or(0),
            offline_devices: pick_u64(record, &["offlineDevices", "offline_devices", "offline"])
                .unwrap_or(0),
            position: 0,
        }
    }

    pub fn rows_from_payload(payload: &Value) -> Vec<Self> {
        extract_rows(payload, TENANT_ENVELOPES)
            .iter()
            .enumerate()
            .map(|(position, record)| Self {
                position,
                ..Self::from_value(record)
            })
            .collect()
    }

    pub fn total_devices(&self) -> u64 {
        self.online_devices + self.offline_devices
    }
}
