use chrono::NaiveDate;
use contracts::domain::a003_sync_log::aggregate::SyncLogEntry;

use crate::shared::list_view::{FilterChain, FilterDef, ListRow, Predicate};

pub const PAGE_SIZE: usize = 10;

pub const DIRECTIONS: &[&str] = &["push", "pull"];

pub const SYNC_LOG_FILTERS: FilterChain = &[
    FilterDef {
        key: "search",
        label: "Search",
        predicate: Predicate::Search(&["device_id", "table_name"]),
    },
    FilterDef {
        key: "direction",
        label: "Direction",
        predicate: Predicate::Exact("direction"),
    },
    FilterDef {
        key: "synced_at",
        label: "Synced",
        predicate: Predicate::DateRange("synced_at"),
    },
];

impl ListRow for SyncLogEntry {
    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "device_id" => Some(self.device_id.clone()),
            "direction" => Some(self.direction.clone()),
            "table_name" => Some(self.table_name.clone()),
            _ => None,
        }
    }

    fn field_date(&self, field: &str) -> Option<NaiveDate> {
        match field {
            "synced_at" => self.synced_at.map(|ts| ts.date_naive()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListViewState;
    use serde_json::json;

    fn fixture() -> ListViewState<SyncLogEntry> {
        let payload = json!({"logs": [
            {"device_id": "pos-1", "direction": "PUSH", "table_name": "orders",
             "record_ids": ["1", "2"], "synced_at": "2024-06-01T08:00:00Z"},
            {"device_id": "pos-2", "direction": "pull", "table_name": "products",
             "record_ids": ["7"], "synced_at": "2024-06-03T08:00:00Z"},
            {"device_id": "pos-1", "direction": "pull", "table_name": "customers"},
        ]});
        let mut state = ListViewState::new(SYNC_LOG_FILTERS, PAGE_SIZE);
        state.replace_source(SyncLogEntry::rows_from_payload(&payload));
        state
    }

    #[test]
    fn test_direction_filter_is_case_insensitive() {
        let mut state = fixture();
        state.set_text("direction", "Push").unwrap();
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].table_name, "orders");
    }

    #[test]
    fn test_search_and_range_combine() {
        let mut state = fixture();
        state.set_text("search", "pos-1").unwrap();
        assert_eq!(state.filtered().len(), 2);

        let june_1 = NaiveDate::from_ymd_opt(2024, 6, 1);
        state.set_range("synced_at", june_1, june_1).unwrap();
        let tables: Vec<_> = state.filtered().iter().map(|e| e.table_name.as_str()).collect();
        assert_eq!(tables, ["orders"]);
    }

    #[test]
    fn test_rows_without_id_get_positional_keys() {
        let state = fixture();
        let keys: Vec<_> = state.source().iter().map(ListRow::row_key).collect();
        assert_eq!(keys, ["0", "1", "2"]);
    }
}
