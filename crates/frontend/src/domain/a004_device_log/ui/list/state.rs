use chrono::NaiveDate;
use contracts::domain::a004_device_log::aggregate::DeviceLogEntry;

use crate::shared::list_view::{FilterChain, FilterDef, ListRow, Predicate};

pub const PAGE_SIZE: usize = 10;

pub const RESOLUTION_OPTIONS: &[&str] = &["Open", "Resolved"];

pub const DEVICE_LOG_FILTERS: FilterChain = &[
    FilterDef {
        key: "search",
        label: "Search",
        predicate: Predicate::Search(&["log_message", "location_screen"]),
    },
    FilterDef {
        key: "level",
        label: "Level",
        predicate: Predicate::Exact("log_level"),
    },
    FilterDef {
        key: "resolved",
        label: "Resolution",
        predicate: Predicate::Exact("resolved"),
    },
];

impl ListRow for DeviceLogEntry {
    fn row_key(&self) -> String {
        self.record_id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "record_id" => self.record_id.clone(),
            "log_message" => self.log_message.clone(),
            "location_screen" => self.location_screen.clone(),
            "log_level" => self.log_level.clone(),
            "device_info" => self.device_info.clone(),
            "resolved" => self.resolved_label().to_string(),
            _ => return None,
        };
        Some(value)
    }

    fn field_date(&self, field: &str) -> Option<NaiveDate> {
        match field {
            "date_time" => self.date_time.map(|ts| ts.date_naive()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListViewState;
    use serde_json::json;

    fn fixture() -> ListViewState<DeviceLogEntry> {
        let payload = json!([
            {"recordID": "r1", "logMessage": "Printer offline", "locationScreen": "Checkout",
             "logLevel": "ERROR", "isResolved": false},
            {"recordID": "r2", "logMessage": "Cache warmed", "locationScreen": "Startup",
             "logLevel": "info", "isResolved": true},
            {"recordID": "r3", "logMessage": "Retrying upload", "locationScreen": "Checkout",
             "logLevel": "warn", "isResolved": false},
        ]);
        let mut state = ListViewState::new(DEVICE_LOG_FILTERS, PAGE_SIZE);
        state.replace_source(DeviceLogEntry::rows_from_payload(&payload));
        state
    }

    #[test]
    fn test_search_covers_message_and_screen() {
        let mut state = fixture();
        state.set_text("search", "checkout").unwrap();
        assert_eq!(state.filtered().len(), 2);
        state.set_text("search", "printer").unwrap();
        assert_eq!(state.filtered()[0].record_id, "r1");
    }

    #[test]
    fn test_level_and_resolution_filters() {
        let mut state = fixture();
        state.set_text("resolved", "open").unwrap();
        assert_eq!(state.filtered().len(), 2);
        state.set_text("level", "error").unwrap();
        let ids: Vec<_> = state.filtered().iter().map(|e| e.record_id.as_str()).collect();
        assert_eq!(ids, ["r1"]);
    }
}
