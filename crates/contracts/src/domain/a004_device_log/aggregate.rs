use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::normalize::{
    display_timestamp, extract_rows, pick_bool, pick_str, pick_str_or_placeholder, pick_text,
    pick_timestamp, PLACEHOLDER,
};

pub const DEVICE_LOG_ENVELOPES: &[&str] = &["data", "logs", "items"];

/// Diagnostic log line uploaded by a device (`GET /api/devicelogs/{deviceId}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceLogEntry {
    pub record_id: String,
    pub date_time: Option<DateTime<Utc>>,
    pub date_time_display: String,
    pub location_screen: String,
    pub log_message: String,
    pub log_level: String,
    pub device_info: String,
    pub is_resolved: bool,
}

impl DeviceLogEntry {
    pub fn from_value(index: usize, record: &Value) -> Self {
        let date_time = pick_timestamp(record, &["dateTime", "date_time", "createdAt"]);
        // Some firmware sends the raw, unparseable clock string; keep it visible.
        let date_time_display = match date_time {
            Some(_) => display_timestamp(date_time.as_ref()),
            None => pick_str_or_placeholder(record, &["dateTime", "date_time"]),
        };
        Self {
            record_id: pick_str(record, &["recordID", "recordId", "record_id", "id", "_id"])
                .unwrap_or_else(|| index.to_string()),
            date_time,
            date_time_display,
            location_screen: pick_str_or_placeholder(
                record,
                &["locationScreen", "location_screen", "screen"],
            ),
            log_message: pick_text(record, &["logMessage", "log_message", "message"])
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            log_level: pick_str(record, &["logLevel", "log_level", "level"])
                .map(|level| level.to_lowercase())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            device_info: pick_text(record, &["deviceInfo", "device_info"])
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            is_resolved: pick_bool(record, &["isResolved", "is_resolved", "resolved"])
                .unwrap_or(false),
        }
    }

    pub fn rows_from_payload(payload: &Value) -> Vec<Self> {
        extract_rows(payload, DEVICE_LOG_ENVELOPES)
            .iter()
            .enumerate()
            .map(|(index, record)| Self::from_value(index, record))
            .collect()
    }

    pub fn resolved_label(&self) -> &'static str {
        if self.is_resolved {
            "Resolved"
        } else {
            "Open"
        }
    }
}
