use contracts::domain::a005_db_table::aggregate::{records_from_payload, table_names, TableRecord};

use crate::shared::api_client::ApiClient;
use crate::shared::list_view::RemoteCollection;

use super::ui::list::state::TableName;

pub const TABLES_PATH: &str = "/api/tables/";

pub fn table_path(table_name: &str) -> String {
    format!("{}{}", TABLES_PATH, urlencoding::encode(table_name))
}

pub fn table_names_source(client: ApiClient) -> RemoteCollection<TableName> {
    RemoteCollection::new(client, TABLES_PATH, |payload, _now| {
        table_names(payload).into_iter().map(TableName).collect()
    })
}

pub fn table_records_source(client: ApiClient, table_name: &str) -> RemoteCollection<TableRecord> {
    RemoteCollection::new(client, table_path(table_name), |payload, _now| {
        records_from_payload(payload)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_path() {
        assert_eq!(table_path("orders"), "/api/tables/orders");
        assert_eq!(table_path("order items"), "/api/tables/order%20items");
    }
}
