use crate::shared::list_view::{FilterChain, FilterDef, ListRow, Predicate};

pub const PAGE_SIZE: usize = 10;

/// Entry of the table browser's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(pub String);

pub const TABLE_NAME_FILTERS: FilterChain = &[FilterDef {
    key: "search",
    label: "Search",
    predicate: Predicate::Search(&["name"]),
}];

impl ListRow for TableName {
    fn row_key(&self) -> String {
        self.0.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        (field == "name").then(|| self.0.clone())
    }
}
