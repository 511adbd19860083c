use contracts::system::users::User;

use crate::shared::list_view::{FilterChain, FilterDef, ListRow, Predicate};

pub const PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

pub const USER_FILTERS: FilterChain = &[
    FilterDef {
        key: "search",
        label: "Search",
        predicate: Predicate::Search(&["name", "email"]),
    },
    FilterDef {
        key: "role",
        label: "Role",
        predicate: Predicate::Exact("role"),
    },
    FilterDef {
        key: "status",
        label: "Status",
        predicate: Predicate::Exact("status"),
    },
];

impl ListRow for User {
    fn row_key(&self) -> String {
        format!("{}:{}", self.position, self.id)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "role" => Some(self.role.clone()),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListViewState;
    use serde_json::json;

    fn fixture() -> ListViewState<User> {
        let payload = json!([
            {"id": "u1", "name": "Ana Ruiz", "email": "ana@tappy.io", "role": "Admin"},
            {"id": "u2", "name": "Bo Chen", "email": "bo@tappy.io", "role": "Support", "isActive": false},
            {"id": "u3", "name": "Cy Park", "email": "cy@bakes.com", "role": "Support"},
            {"id": "u4", "name": "Di Okoro", "email": "di@tappy.io", "role": "Support"},
            {"id": "u5", "name": "Ed Stone", "email": "ed@tappy.io", "role": "Admin"},
            {"id": "u6", "name": "Fay Lund", "email": "fay@tappy.io", "role": "Support"},
        ]);
        let mut state = ListViewState::new(USER_FILTERS, PAGE_SIZE);
        state.replace_source(User::rows_from_payload(&payload));
        state
    }

    #[test]
    fn test_row_keys_unique_without_ids_or_emails() {
        let rows = User::rows_from_payload(&json!([{"name": "A"}, {"name": "B"}]));
        assert_eq!(rows[0].id, rows[1].id);
        assert_ne!(rows[0].row_key(), rows[1].row_key());
    }

    #[test]
    fn test_search_on_name_and_email() {
        let mut state = fixture();
        state.set_text("search", "bakes.com").unwrap();
        assert_eq!(state.filtered()[0].id, "u3");
        state.set_text("search", "ruiz").unwrap();
        assert_eq!(state.filtered()[0].id, "u1");
    }

    #[test]
    fn test_role_and_status_filters() {
        let mut state = fixture();
        state.set_text("role", "support").unwrap();
        assert_eq!(state.filtered().len(), 4);
        state.set_text("status", "Disabled").unwrap();
        let ids: Vec<_> = state.filtered().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["u2"]);
    }

    #[test]
    fn test_page_size_change_keeps_rows() {
        let mut state = fixture();
        state.set_page_size(PAGE_SIZE_OPTIONS[0]);
        assert_eq!(state.total_pages(), 2);
        state.set_page(2);
        assert_eq!(state.page_rows().len(), 1);
        state.set_page_size(25);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_rows().len(), 6);
    }
}
