use contracts::domain::a003_sync_log::aggregate::SyncLogEntry;

use crate::shared::api_client::ApiClient;
use crate::shared::list_view::RemoteCollection;

pub const LOGS_PATH: &str = "/api/logs";

pub fn sync_logs_source(client: ApiClient) -> RemoteCollection<SyncLogEntry> {
    RemoteCollection::new(client, LOGS_PATH, |payload, _now| {
        SyncLogEntry::rows_from_payload(payload)
    })
}
