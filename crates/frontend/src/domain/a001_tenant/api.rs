use contracts::domain::a001_tenant::aggregate::Tenant;

use crate::shared::api_client::ApiClient;
use crate::shared::list_view::RemoteCollection;

pub const PLANS_PATH: &str = "/api/plans";

pub fn tenants_source(client: ApiClient) -> RemoteCollection<Tenant> {
    RemoteCollection::new(client, PLANS_PATH, |payload, _now| {
        Tenant::rows_from_payload(payload)
    })
}
