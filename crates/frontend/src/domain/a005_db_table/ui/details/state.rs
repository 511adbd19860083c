use contracts::domain::a005_db_table::aggregate::TableRecord;

use crate::shared::list_view::{FilterChain, FilterDef, ListRow, Predicate};

pub const PAGE_SIZE: usize = 10;

/// Synthetic field holding every non-null cell of a record.
const ROW_TEXT: &str = "row_text";

pub const TABLE_RECORD_FILTERS: FilterChain = &[FilterDef {
    key: "search",
    label: "Search",
    predicate: Predicate::Search(&[ROW_TEXT]),
}];

impl ListRow for TableRecord {
    fn row_key(&self) -> String {
        self.index.to_string()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        if field == ROW_TEXT {
            let text = self
                .cells
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(_, value)| value.display())
                .collect::<Vec<_>>()
                .join("\u{1f}");
            return Some(text);
        }
        self.cell(field).map(|value| value.display().to_string())
    }
}

/// Column order of the first record; later records follow it.
pub fn columns(records: &[TableRecord]) -> Vec<String> {
    records
        .first()
        .map(|first| first.cells.iter().map(|(name, _)| name.clone()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListViewState;
    use contracts::domain::a005_db_table::aggregate::records_from_payload;
    use serde_json::json;

    fn fixture() -> ListViewState<TableRecord> {
        let payload = json!([
            {"id": 1, "sku": "BREAD-01", "note": null},
            {"id": 2, "sku": "CAKE-07", "note": "seasonal"},
            {"id": 3, "sku": "ROLL-02", "note": null},
        ]);
        let mut state = ListViewState::new(TABLE_RECORD_FILTERS, 2);
        state.replace_source(records_from_payload(&payload));
        state
    }

    #[test]
    fn test_search_spans_all_cells() {
        let mut state = fixture();
        state.set_text("search", "seasonal").unwrap();
        assert_eq!(state.filtered().len(), 1);
        state.set_text("search", "bread").unwrap();
        assert_eq!(state.filtered()[0].index, 0);
    }

    #[test]
    fn test_null_cells_are_not_searchable() {
        let mut state = fixture();
        state.set_text("search", "null").unwrap();
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_columns_and_paging() {
        let state = fixture();
        assert_eq!(columns(state.source()).len(), 3);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page_rows().len(), 2);
    }
}
