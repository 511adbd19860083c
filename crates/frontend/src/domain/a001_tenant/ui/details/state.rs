use crate::shared::list_view::{FilterChain, FilterDef, Predicate};

pub const PAGE_SIZE: usize = 5;

/// Paired devices only need a search; the tenant is fixed by the tab.
pub const PAIRED_DEVICE_FILTERS: FilterChain = &[
    FilterDef {
        key: "search",
        label: "Search",
        predicate: Predicate::Search(&["device_name", "device_id", "paired_with"]),
    },
    FilterDef {
        key: "status",
        label: "Status",
        predicate: Predicate::Exact("status"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{ListRow, ListViewState};
    use chrono::{DateTime, Utc};
    use contracts::domain::a002_device::aggregate::Device;
    use serde_json::json;

    #[test]
    fn test_paired_rows_are_searchable_by_partner() {
        let now = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let payload = json!([
            {"deviceId": "pos-1", "deviceName": "Till", "pairedWithDeviceId": "tab-9", "pairedWithDeviceName": "Tab 9"},
            {"deviceId": "pos-2", "deviceName": "Kiosk", "pairedWithDeviceId": "tab-4", "pairedWithDeviceName": "Tab 4"},
        ]);
        let rows = Device::paired_rows(&payload, "t-1", now);
        assert_eq!(rows.len(), 4);

        let mut state = ListViewState::new(PAIRED_DEVICE_FILTERS, PAGE_SIZE);
        state.replace_source(rows);
        state.set_text("search", "KIOSK").unwrap();
        let ids: Vec<_> = state.filtered().iter().map(|d| d.device_id.as_str()).collect();
        assert_eq!(ids, ["pos-2", "tab-4"]);
    }

    #[test]
    fn test_paired_row_keys_unique_when_a_device_pairs_twice() {
        let now = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let payload = json!([
            {"deviceId": "pos-1", "pairedWithDeviceId": "tab-1"},
            {"deviceId": "pos-1", "pairedWithDeviceId": "tab-1"},
            {},
        ]);
        let rows = Device::paired_rows(&payload, "t-1", now);
        let keys: std::collections::HashSet<_> = rows.iter().map(ListRow::row_key).collect();
        assert_eq!(keys.len(), 6);
    }
}
