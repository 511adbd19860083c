//! Tab titles, keyed by tab key.

pub const TENANT_DETAIL_PREFIX: &str = "a001_tenant_detail_";
pub const DEVICE_LOG_PREFIX: &str = "a004_device_log_";
pub const DB_TABLE_PREFIX: &str = "a005_db_table_";

/// Title for a tab key. Detail keys include their parameter in the title.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(id) = key.strip_prefix(TENANT_DETAIL_PREFIX) {
        return detail_tab_label("Tenant", id);
    }
    if let Some(id) = key.strip_prefix(DEVICE_LOG_PREFIX) {
        return detail_tab_label("Device logs", id);
    }
    if let Some(name) = key.strip_prefix(DB_TABLE_PREFIX) {
        return detail_tab_label("Table", name);
    }
    let label = match key {
        "d400_overview" => "Dashboard",
        "a001_tenant" => "Tenants",
        "a002_device" => "Devices",
        "a003_sync_log" => "Sync logs",
        "a005_db_table" => "Tables",
        "sys_users" => "Users",
        _ => key,
    };
    label.to_string()
}

/// «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn tenant_detail_key(tenant_id: &str) -> String {
    format!("{}{}", TENANT_DETAIL_PREFIX, tenant_id)
}

pub fn device_log_key(device_id: &str) -> String {
    format!("{}{}", DEVICE_LOG_PREFIX, device_id)
}

pub fn db_table_key(table_name: &str) -> String {
    format!("{}{}", DB_TABLE_PREFIX, table_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a002_device"), "Devices");
        assert_eq!(tab_label_for_key(&device_log_key("dev-1")), "Device logs · dev-1");
        assert_eq!(tab_label_for_key(&db_table_key("orders")), "Table · orders");
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }
}
