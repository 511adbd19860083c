use contracts::domain::a001_tenant::aggregate::Tenant;

use crate::shared::list_view::{FilterChain, FilterDef, ListRow, Predicate};

pub const PAGE_SIZE: usize = 10;

pub const TENANT_FILTERS: FilterChain = &[
    FilterDef {
        key: "search",
        label: "Search",
        predicate: Predicate::Search(&["name", "tenant_id"]),
    },
    FilterDef {
        key: "erp",
        label: "ERP",
        predicate: Predicate::Exact("erp"),
    },
    FilterDef {
        key: "subscription",
        label: "Subscription",
        predicate: Predicate::Exact("subscription"),
    },
];

impl ListRow for Tenant {
    /// Several plans can share a tenant id, and the id may be missing.
    fn row_key(&self) -> String {
        format!("{}:{}", self.position, self.tenant_id)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "tenant_id" => Some(self.tenant_id.clone()),
            "name" => Some(self.name.clone()),
            "erp" => Some(self.erp.clone()),
            "subscription" => Some(self.subscription.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListViewState;
    use serde_json::json;

    fn tenant(id: &str, name: &str, erp: &str, subscription: &str) -> Tenant {
        Tenant::from_value(&json!({
            "tenantId": id,
            "name": name,
            "erp": erp,
            "subscription": subscription,
        }))
    }

    #[test]
    fn test_row_keys_unique_for_repeated_and_missing_ids() {
        let rows = Tenant::rows_from_payload(&json!([
            {"_id": "p1", "tenantId": "t-1"},
            {"_id": "p2", "tenantId": "t-1"},
            {"name": "A"},
            {"name": "B"},
        ]));
        let keys: Vec<_> = rows.iter().map(ListRow::row_key).collect();
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), rows.len(), "keys: {:?}", keys);
    }

    fn fixture() -> ListViewState<Tenant> {
        let mut state = ListViewState::new(TENANT_FILTERS, PAGE_SIZE);
        state.replace_source(vec![
            tenant("t-1", "Sweet Bakes", "Odoo", "Active"),
            tenant("t-2", "Corner Cafe", "SAP", "Expired"),
            tenant("t-3", "Bakery Hub", "Odoo", "Expired"),
        ]);
        state
    }

    #[test]
    fn test_search_covers_name_and_id() {
        let mut state = fixture();
        state.set_text("search", "bak").unwrap();
        assert_eq!(state.filtered().len(), 2);
        state.set_text("search", "T-2").unwrap();
        assert_eq!(state.filtered()[0].name, "Corner Cafe");
    }

    #[test]
    fn test_exact_filters_combine() {
        let mut state = fixture();
        state.set_text("erp", "Odoo").unwrap();
        state.set_text("subscription", "expired").unwrap();
        let ids: Vec<_> = state.filtered().iter().map(|t| t.tenant_id.as_str()).collect();
        assert_eq!(ids, ["t-3"]);
        assert_eq!(state.filters().active_count(), 2);
    }
}
