use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::normalize::{
    display_timestamp, extract_rows, pick_list, pick_str, pick_str_or_placeholder, pick_timestamp,
    PLACEHOLDER,
};

pub const SYNC_LOG_ENVELOPES: &[&str] = &["data", "logs", "items"];

/// One push or pull recorded by the sync service (`GET /api/logs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncLogEntry {
    pub id: String,
    pub device_id: String,
    pub direction: String,
    pub table_name: String,
    pub record_ids: Vec<String>,
    pub synced_at: Option<DateTime<Utc>>,
    pub synced_at_display: String,
}

impl SyncLogEntry {
    /// `index` keys rows whose record carries no id of its own.
    pub fn from_value(index: usize, record: &Value) -> Self {
        let synced_at = pick_timestamp(record, &["synced_at", "syncedAt", "createdAt", "created_at"]);
        Self {
            id: pick_str(record, &["id", "_id", "log_id"]).unwrap_or_else(|| index.to_string()),
            device_id: pick_str_or_placeholder(record, &["device_id", "deviceId"]),
            direction: pick_str(record, &["direction"])
                .map(|d| d.to_lowercase())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            table_name: pick_str_or_placeholder(record, &["table_name", "tableName"]),
            record_ids: pick_list(record, &["record_ids", "recordIds"]),
            synced_at_display: display_timestamp(synced_at.as_ref()),
            synced_at,
        }
    }

    pub fn rows_from_payload(payload: &Value) -> Vec<Self> {
        extract_rows(payload, SYNC_LOG_ENVELOPES)
            .iter()
            .enumerate()
            .map(|(index, record)| Self::from_value(index, record))
            .collect()
    }

    pub fn record_count(&self) -> usize {
        self.record_ids.len()
    }
}

/// Headline figures for the overview dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub syncs_last_24h: usize,
    pub devices_last_24h: usize,
    pub records_last_24h: usize,
}

impl SyncSummary {
    pub fn compute(entries: &[SyncLogEntry], now: DateTime<Utc>) -> Self {
        let since = now - Duration::hours(24);
        let recent: Vec<&SyncLogEntry> = entries
            .iter()
            .filter(|e| e.synced_at.is_some_and(|ts| ts >= since && ts <= now))
            .collect();
        let mut devices: Vec<&str> = recent.iter().map(|e| e.device_id.as_str()).collect();
        devices.sort_unstable();
        devices.dedup();
        Self {
            syncs_last_24h: recent.len(),
            devices_last_24h: devices.len(),
            records_last_24h: recent.iter().map(|e| e.record_count()).sum(),
        }
    }
}
