//! Helpers for flattening loosely-typed backend payloads into view-model rows.
//!
//! The Tappy backend is not consistent about field naming (`deviceId` vs
//! `device_id`, `lastUpdated` vs `updatedAt`, bare arrays vs `{ "data": [...] }`
//! envelopes). Every row type resolves its fields through the pickers below so
//! that a missing key turns into an explicit placeholder instead of a hole.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Placeholder shown for text fields the backend did not send.
pub const PLACEHOLDER: &str = "N/A";

/// Envelope keys tried when a payload is an object rather than a bare array.
pub const DEFAULT_ENVELOPES: &[&str] = &["data", "items", "rows"];

/// Epoch values above this are treated as milliseconds.
const EPOCH_MILLIS_CUTOFF: i64 = 100_000_000_000;

/// Returns the records inside `payload`.
///
/// Accepts a bare JSON array, or an object wrapping the array under the first
/// matching key of `envelope_keys`. Anything else yields an empty slice.
pub fn extract_rows<'a>(payload: &'a Value, envelope_keys: &[&str]) -> &'a [Value] {
    match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => envelope_keys
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// First non-blank scalar among `keys`, rendered as a string.
pub fn pick_str(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Same as [`pick_str`] but falls back to [`PLACEHOLDER`].
pub fn pick_str_or_placeholder(record: &Value, keys: &[&str]) -> String {
    pick_str(record, keys).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Like [`pick_str`], but nested objects and arrays are rendered as compact JSON.
pub fn pick_text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::Null => None,
        v @ (Value::Object(_) | Value::Array(_)) => Some(v.to_string()),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    })
}

pub fn pick_u64(record: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn pick_bool(record: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|v| v != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// First parseable timestamp among `keys`.
pub fn pick_timestamp(record: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(parse_timestamp_value))
}

/// Collects a list of identifiers from an array field or a comma separated string.
pub fn pick_list(record: &Value, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .find_map(|key| match record.get(*key)? {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::String(s) => Some(
                s.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        })
        .unwrap_or_default()
}

pub fn parse_timestamp_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n.as_i64().and_then(from_epoch),
        _ => None,
    }
}

/// Parses RFC 3339, naive `YYYY-MM-DD HH:MM:SS` (taken as UTC), bare dates and
/// epoch seconds / milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    raw.parse::<i64>().ok().and_then(from_epoch)
}

fn from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value.abs() > EPOCH_MILLIS_CUTOFF {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

/// Display form used in every table: `12 Jul 2024, 10:05`.
pub fn display_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_rows_accepts_bare_arrays_and_envelopes() {
        let bare = json!([{ "id": 1 }, { "id": 2 }]);
        assert_eq!(extract_rows(&bare, DEFAULT_ENVELOPES).len(), 2);

        let wrapped = json!({ "success": true, "data": [{ "id": 1 }] });
        assert_eq!(extract_rows(&wrapped, DEFAULT_ENVELOPES).len(), 1);

        let unknown = json!({ "payload": [{ "id": 1 }] });
        assert!(extract_rows(&unknown, DEFAULT_ENVELOPES).is_empty());
        assert!(extract_rows(&json!("nope"), DEFAULT_ENVELOPES).is_empty());
    }

    #[test]
    fn pick_str_takes_first_non_blank_alias() {
        let record = json!({ "device_id": "  ", "deviceId": "T-1", "count": 3 });
        assert_eq!(
            pick_str(&record, &["device_id", "deviceId"]).as_deref(),
            Some("T-1")
        );
        assert_eq!(pick_str(&record, &["count"]).as_deref(), Some("3"));
        assert_eq!(pick_str_or_placeholder(&record, &["missing"]), PLACEHOLDER);
    }

    #[test]
    fn pick_text_renders_nested_values_as_json() {
        let record = json!({ "deviceInfo": { "os": "android" } });
        assert_eq!(
            pick_text(&record, &["deviceInfo"]).as_deref(),
            Some(r#"{"os":"android"}"#)
        );
    }

    #[test]
    fn pick_bool_understands_common_encodings() {
        let record = json!({ "a": true, "b": 0, "c": "yes", "d": "maybe" });
        assert_eq!(pick_bool(&record, &["a"]), Some(true));
        assert_eq!(pick_bool(&record, &["b"]), Some(false));
        assert_eq!(pick_bool(&record, &["c"]), Some(true));
        assert_eq!(pick_bool(&record, &["d"]), None);
    }

    #[test]
    fn pick_list_handles_arrays_and_csv() {
        let record = json!({ "record_ids": [1, "2"], "csv": "a, b,,c" });
        assert_eq!(pick_list(&record, &["record_ids"]), vec!["1", "2"]);
        assert_eq!(pick_list(&record, &["csv"]), vec!["a", "b", "c"]);
        assert!(pick_list(&record, &["missing"]).is_empty());
    }

    #[test]
    fn parse_timestamp_supports_backend_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 7, 12, 10, 5, 0).unwrap();
        assert_eq!(parse_timestamp("2024-07-12T10:05:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-07-12T12:05:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-07-12 10:05:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-07-12T10:05:00.000"), Some(expected));
        assert_eq!(
            parse_timestamp(&expected.timestamp().to_string()),
            Some(expected)
        );
        assert_eq!(
            parse_timestamp_value(&json!(expected.timestamp_millis())),
            Some(expected)
        );
        assert_eq!(parse_timestamp("12 July, 10:05 am"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn display_timestamp_uses_placeholder_for_missing_values() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 12, 10, 5, 0).unwrap();
        assert_eq!(display_timestamp(Some(&ts)), "12 Jul 2024, 10:05");
        assert_eq!(display_timestamp(None), PLACEHOLDER);
    }
}
