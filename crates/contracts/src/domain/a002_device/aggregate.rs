use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::normalize::{
    display_timestamp, extract_rows, pick_str, pick_str_or_placeholder, pick_timestamp,
    PLACEHOLDER,
};

/// A device counts as online when it reported within this many minutes.
pub const ONLINE_THRESHOLD_MINUTES: i64 = 30;

pub const DEVICE_ENVELOPES: &[&str] = &["data", "devices", "pairings", "items"];
pub const PAIRED_ENVELOPES: &[&str] = &["pairedDevices", "data"];

const ID_KEYS: &[&str] = &["deviceId", "device_id", "id", "_id"];
const NAME_KEYS: &[&str] = &["deviceName", "device_name", "name"];
const TENANT_ID_KEYS: &[&str] = &["tenantId", "tenant_id", "teanut"];
const TENANT_NAME_KEYS: &[&str] = &["tenantName", "tenant_name", "tenant"];
const PAIRED_KEYS: &[&str] = &["pairedWithDeviceName", "pairedWith", "paired_with"];
const LAST_SEEN_KEYS: &[&str] = &[
    "lastUpdated",
    "last_updated",
    "updatedAt",
    "updated_at",
    "lastSeen",
    "last_seen",
    "pairedAt",
];
const SYNC_STATUS_KEYS: &[&str] = &["syncStatus", "sync_status"];

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    Online,
    Offline,
}

impl DeviceStatus {
    /// Online iff `now - last_seen <= ONLINE_THRESHOLD_MINUTES`; no timestamp means offline.
    pub fn derive(last_seen: Option<&DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match last_seen {
            Some(ts) if now.signed_duration_since(*ts) <= Duration::minutes(ONLINE_THRESHOLD_MINUTES) => {
                DeviceStatus::Online
            }
            _ => DeviceStatus::Offline,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "Online",
            DeviceStatus::Offline => "Offline",
        }
    }
}

// ============================================================================
// Row
// ============================================================================

/// Flat device row shared by the device list and the tenant detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: String,
    pub device_name: String,
    pub tenant_id: String,
    pub tenant_name: String,
    pub paired_with: String,
    pub last_seen: Option<DateTime<Utc>>,
    pub last_seen_display: String,
    pub status: DeviceStatus,
    pub sync_status: String,
    /// Position in the payload (two slots per pairing for paired rows).
    #[serde(default)]
    pub position: usize,
}

impl Device {
    /// Normalizes one backend record. `now` is captured once per fetch so that
    /// every row of a response is judged against the same instant.
    pub fn from_value(record: &Value, now: DateTime<Utc>) -> Self {
        let last_seen = pick_timestamp(record, LAST_SEEN_KEYS);
        let device_id = pick_str_or_placeholder(record, ID_KEYS);
        let device_name = pick_str(record, NAME_KEYS).unwrap_or_else(|| device_id.clone());
        Self {
            device_id,
            device_name,
            tenant_id: pick_str_or_placeholder(record, TENANT_ID_KEYS),
            tenant_name: pick_str_or_placeholder(record, TENANT_NAME_KEYS),
            paired_with: pick_str_or_placeholder(record, PAIRED_KEYS),
            last_seen_display: display_timestamp(last_seen.as_ref()),
            status: DeviceStatus::derive(last_seen.as_ref(), now),
            last_seen,
            sync_status: pick_str_or_placeholder(record, SYNC_STATUS_KEYS),
            position: 0,
        }
    }

    /// Rows of `GET /api/devices`.
    pub fn rows_from_payload(payload: &Value, now: DateTime<Utc>) -> Vec<Self> {
        extract_rows(payload, DEVICE_ENVELOPES)
            .iter()
            .enumerate()
            .map(|(position, record)| Self {
                position,
                ..Self::from_value(record, now)
            })
            .collect()
    }

    /// Rows of `GET /api/pairing/paired-devices/{tenantId}`.
    ///
    /// Each pairing becomes two rows, the device and its partner, each naming
    /// the other in `paired_with`. `pairedAt` stands in for the last-seen time.
    pub fn paired_rows(payload: &Value, tenant_id: &str, now: DateTime<Utc>) -> Vec<Self> {
        extract_rows(payload, PAIRED_ENVELOPES)
            .iter()
            .enumerate()
            .flat_map(|(index, pair)| {
                let paired_at = pick_timestamp(pair, &["pairedAt", "paired_at"]);
                let first_id = pick_str_or_placeholder(pair, &["deviceId", "device_id"]);
                let first_name =
                    pick_str(pair, &["deviceName", "device_name"]).unwrap_or_else(|| first_id.clone());
                let second_id =
                    pick_str_or_placeholder(pair, &["pairedWithDeviceId", "paired_with_device_id"]);
                let second_name = pick_str(pair, &["pairedWithDeviceName", "paired_with_device_name"])
                    .unwrap_or_else(|| second_id.clone());
                let tenant_name = pick_str_or_placeholder(pair, TENANT_NAME_KEYS);

                let make = |side: usize, id: &str, name: &str, partner: &str| Device {
                    device_id: id.to_string(),
                    device_name: name.to_string(),
                    tenant_id: tenant_id.to_string(),
                    tenant_name: tenant_name.clone(),
                    paired_with: partner.to_string(),
                    last_seen: paired_at,
                    last_seen_display: display_timestamp(paired_at.as_ref()),
                    status: DeviceStatus::derive(paired_at.as_ref(), now),
                    sync_status: PLACEHOLDER.to_string(),
                    position: index * 2 + side,
                };

                [
                    make(0, &first_id, &first_name, &second_name),
                    make(1, &second_id, &second_name, &first_name),
                ]
            })
            .collect()
    }
}
