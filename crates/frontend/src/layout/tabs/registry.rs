//! Tab content registry: the one place mapping a tab key to its view.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_tenant::ui::details::TenantDetail;
use crate::domain::a001_tenant::ui::list::TenantList;
use crate::domain::a002_device::ui::list::DeviceList;
use crate::domain::a003_sync_log::ui::list::SyncLogList;
use crate::domain::a004_device_log::ui::list::DeviceLogList;
use crate::domain::a005_db_table::ui::details::DbTableRecords;
use crate::domain::a005_db_table::ui::list::DbTableList;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;

use super::tab_labels::{DB_TABLE_PREFIX, DEVICE_LOG_PREFIX, TENANT_DETAIL_PREFIX};

/// Renders the content of the tab identified by `key`. Detail keys carry
/// their parameter after the prefix (`a004_device_log_{deviceId}`).
pub fn render_tab_content(key: &str) -> AnyView {
    if let Some(tenant_id) = key.strip_prefix(TENANT_DETAIL_PREFIX) {
        return view! { <TenantDetail tenant_id=tenant_id.to_string() /> }.into_any();
    }
    if let Some(device_id) = key.strip_prefix(DEVICE_LOG_PREFIX) {
        return view! { <DeviceLogList device_id=device_id.to_string() /> }.into_any();
    }
    if let Some(table_name) = key.strip_prefix(DB_TABLE_PREFIX) {
        return view! { <DbTableRecords table_name=table_name.to_string() /> }.into_any();
    }

    match key {
        // Overview
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        // Domain
        "a001_tenant" => view! { <TenantList /> }.into_any(),
        "a002_device" => view! { <DeviceList /> }.into_any(),
        "a003_sync_log" => view! { <SyncLogList /> }.into_any(),
        "a005_db_table" => view! { <DbTableList /> }.into_any(),

        // System
        "sys_users" => view! { <UsersList /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
