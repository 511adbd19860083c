use chrono::NaiveDate;
use contracts::domain::a002_device::aggregate::Device;

use crate::shared::list_view::{FilterChain, FilterDef, ListRow, Predicate};

pub const PAGE_SIZE: usize = 10;

pub const DEVICE_FILTERS: FilterChain = &[
    FilterDef {
        key: "search",
        label: "Search",
        predicate: Predicate::Search(&["device_name", "device_id", "tenant_id", "tenant_name"]),
    },
    FilterDef {
        key: "tenant",
        label: "Tenant",
        predicate: Predicate::Exact("tenant_name"),
    },
    FilterDef {
        key: "status",
        label: "Status",
        predicate: Predicate::Exact("status"),
    },
    FilterDef {
        key: "last_seen",
        label: "Last seen",
        predicate: Predicate::DateRange("last_seen"),
    },
];

impl ListRow for Device {
    fn row_key(&self) -> String {
        format!("{}:{}", self.position, self.device_id)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "device_id" => &self.device_id,
            "device_name" => &self.device_name,
            "tenant_id" => &self.tenant_id,
            "tenant_name" => &self.tenant_name,
            "paired_with" => &self.paired_with,
            "sync_status" => &self.sync_status,
            "status" => return Some(self.status.as_str().to_string()),
            _ => return None,
        };
        Some(value.clone())
    }

    fn field_date(&self, field: &str) -> Option<NaiveDate> {
        match field {
            "last_seen" => self.last_seen.map(|ts| ts.date_naive()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{project_status, ListViewState};
    use chrono::{DateTime, Duration, Utc};
    use contracts::domain::a002_device::aggregate::DeviceStatus;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn device(id: &str, tenant: &str, minutes_ago: i64) -> Device {
        let seen = now() - Duration::minutes(minutes_ago);
        Device::from_value(
            &json!({
                "deviceId": id,
                "deviceName": id,
                "tenantId": format!("t-{}", tenant.len()),
                "tenantName": tenant,
                "lastUpdated": seen.to_rfc3339(),
            }),
            now(),
        )
    }

    #[test]
    fn test_row_keys_unique_without_device_ids() {
        let rows = Device::rows_from_payload(
            &json!([{"deviceName": "A"}, {"deviceName": "B"}, {"deviceId": "d-1"}, {"deviceId": "d-1"}]),
            now(),
        );
        let keys: Vec<_> = rows.iter().map(ListRow::row_key).collect();
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), rows.len(), "keys: {:?}", keys);
    }

    fn state_with(rows: Vec<Device>) -> ListViewState<Device> {
        let mut state = ListViewState::new(DEVICE_FILTERS, PAGE_SIZE);
        state.replace_source(rows);
        state
    }

    #[test]
    fn test_search_matches_through_tenant_name() {
        let mut state = state_with(vec![
            device("Tappy-23B1", "Sweet Bakes", 5),
            device("Tappy-77C0", "Corner Cafe", 5),
        ]);
        state.set_text("search", "bakes").unwrap();
        let names: Vec<_> = state.filtered().iter().map(|d| d.device_name.as_str()).collect();
        assert_eq!(names, ["Tappy-23B1"]);
    }

    #[test]
    fn test_twelve_devices_make_two_pages() {
        let rows = (0..12).map(|i| device(&format!("dev-{i:02}"), "Acme", 1)).collect();
        let mut state = state_with(rows);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page_rows().len(), 10);
        state.set_page(2);
        assert_eq!(state.page_rows().len(), 2);
    }

    #[test]
    fn test_status_filter_agrees_with_badge() {
        let mut state = state_with(vec![
            device("fresh", "Acme", 29),
            device("boundary", "Acme", 30),
            device("stale", "Acme", 31),
        ]);
        state.set_text("status", "online").unwrap();
        let online: Vec<_> = state.filtered().iter().map(|d| d.device_id.as_str()).collect();
        assert_eq!(online, ["fresh", "boundary"]);
        for row in state.filtered() {
            assert_eq!(row.status, DeviceStatus::Online);
            assert_eq!(project_status(row.status.as_str()).label, "Online");
        }

        state.set_text("status", "Offline").unwrap();
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].device_id, "stale");
    }

    #[test]
    fn test_tenant_filter_resets_page() {
        let mut rows: Vec<Device> = (0..15).map(|i| device(&format!("a-{i}"), "Acme", 1)).collect();
        rows.push(device("b-1", "Bakery", 1));
        let mut state = state_with(rows);
        state.set_page(2);
        state.set_text("tenant", "bakery").unwrap();
        assert_eq!(state.page(), 1);
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_last_seen_range_excludes_unseen_devices() {
        let never_seen = Device::from_value(&json!({"deviceId": "ghost"}), now());
        let mut state = state_with(vec![device("seen", "Acme", 10), never_seen]);
        let today = now().date_naive();
        state.set_range("last_seen", Some(today), Some(today)).unwrap();
        let ids: Vec<_> = state.filtered().iter().map(|d| d.device_id.as_str()).collect();
        assert_eq!(ids, ["seen"]);
    }
}
