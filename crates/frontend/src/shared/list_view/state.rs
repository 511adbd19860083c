use chrono::NaiveDate;

use super::filter::{apply_filters, resolve, FilterChain, FilterError, FilterValue, Filters, ListRow};
use super::paginator::{clamp_page, page_slice, total_pages, PagerModel};

/// Search, filter and page state of one list screen.
///
/// `filtered` is always the order-preserving subset of `source` accepted by
/// `filters`, and `page` always lies in `[1, max(total_pages, 1)]`.
#[derive(Debug, Clone)]
pub struct ListViewState<T> {
    chain: FilterChain,
    source: Vec<T>,
    filters: Filters,
    filtered: Vec<T>,
    page: usize,
    page_size: usize,
}

impl<T: ListRow> ListViewState<T> {
    pub fn new(chain: FilterChain, page_size: usize) -> Self {
        Self {
            chain,
            source: Vec::new(),
            filters: Filters::default(),
            filtered: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn chain(&self) -> FilterChain {
        self.chain
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    /// Replaces the source wholesale, keeping filters and clamping the page.
    pub fn replace_source(&mut self, rows: Vec<T>) {
        self.source = rows;
        self.recompute();
        self.page = clamp_page(self.page, self.total_pages());
    }

    /// Sets one filter. Unknown keys and values of the wrong kind are
    /// rejected; an actual change resets the page to 1.
    pub fn set_filter(&mut self, key: &str, value: FilterValue) -> Result<bool, FilterError> {
        let def = resolve(self.chain, key, &value)?;
        let changed = self.filters.put(def.key, value);
        if changed {
            self.recompute();
            self.page = 1;
        }
        Ok(changed)
    }

    pub fn set_text(&mut self, key: &str, text: impl Into<String>) -> Result<bool, FilterError> {
        self.set_filter(key, FilterValue::Text(text.into()))
    }

    pub fn set_range(
        &mut self,
        key: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<bool, FilterError> {
        self.set_filter(key, FilterValue::Range { from, to })
    }

    pub fn reset_filters(&mut self) {
        if self.filters.clear() {
            self.recompute();
        }
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn page_rows(&self) -> &[T] {
        page_slice(&self.filtered, self.page, self.page_size)
    }

    pub fn pager(&self) -> PagerModel {
        PagerModel {
            page: self.page,
            total_pages: self.total_pages(),
            total_count: self.filtered.len(),
            page_size: self.page_size,
        }
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.source, self.chain, &self.filters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::filter::{FilterDef, Predicate};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: usize,
        group: &'static str,
    }

    impl ListRow for Item {
        fn row_key(&self) -> String {
            self.id.to_string()
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "id" => Some(self.id.to_string()),
                "group" => Some(self.group.to_string()),
                _ => None,
            }
        }
    }

    const CHAIN: FilterChain = &[
        FilterDef {
            key: "search",
            label: "Search",
            predicate: Predicate::Search(&["id"]),
        },
        FilterDef {
            key: "group",
            label: "Group",
            predicate: Predicate::Exact("group"),
        },
    ];

    fn items(n: usize) -> Vec<Item> {
        (1..=n)
            .map(|id| Item {
                id,
                group: if id % 4 == 0 { "a" } else { "b" },
            })
            .collect()
    }

    fn state_with(n: usize, page_size: usize) -> ListViewState<Item> {
        let mut state = ListViewState::new(CHAIN, page_size);
        state.replace_source(items(n));
        state
    }

    #[test]
    fn test_new_state_is_empty_on_first_page() {
        let state: ListViewState<Item> = ListViewState::new(CHAIN, 10);
        assert_eq!(state.page(), 1);
        assert!(state.page_rows().is_empty());
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn test_changing_a_filter_resets_page() {
        let mut state = state_with(30, 5);
        state.set_page(4);
        assert_eq!(state.page(), 4);

        assert_eq!(state.set_text("group", "b"), Ok(true));
        assert_eq!(state.page(), 1);

        state.set_page(3);
        // Same value again is not a change.
        assert_eq!(state.set_text("group", "b"), Ok(false));
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_unknown_filter_key_is_rejected() {
        let mut state = state_with(3, 5);
        assert_eq!(
            state.set_text("tenant", "x"),
            Err(FilterError::UnknownKey("tenant".into()))
        );
        assert!(state.filters().is_empty());
    }

    #[test]
    fn test_shrinking_source_clamps_to_last_valid_page() {
        let mut state = state_with(30, 10);
        state.set_page(3);
        state.replace_source(items(14));
        assert_eq!(state.page(), 2);
        assert_eq!(state.page_rows().len(), 4);
    }

    #[test]
    fn test_non_empty_filtered_never_yields_empty_page() {
        let mut state = state_with(23, 5);
        for page in 0..10 {
            state.set_page(page);
            assert!(!state.page_rows().is_empty());
        }
        state.replace_source(Vec::new());
        assert_eq!(state.page(), 1);
        assert!(state.page_rows().is_empty());
    }

    #[test]
    fn test_prev_next_stay_in_bounds() {
        let mut state = state_with(12, 10);
        state.prev_page();
        assert_eq!(state.page(), 1);
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 2);
        assert_eq!(state.page_rows().len(), 2);
    }

    #[test]
    fn test_page_size_change_and_reset() {
        let mut state = state_with(20, 5);
        state.set_page(3);
        state.set_page_size(10);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 2);

        state.set_text("search", "1").unwrap();
        assert!(state.filtered().len() < 20);
        state.set_page(2);
        state.reset_filters();
        assert_eq!(state.filtered().len(), 20);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_filters_survive_refresh() {
        let mut state = state_with(8, 5);
        state.set_text("group", "a").unwrap();
        assert_eq!(state.filtered().len(), 2);
        state.replace_source(items(16));
        assert_eq!(state.filtered().len(), 4);
        assert_eq!(state.pager().total_count, 4);
    }
}
