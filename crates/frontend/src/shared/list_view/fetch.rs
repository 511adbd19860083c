//! Load lifecycle of a list screen and stale-response protection.

use super::filter::{FilterChain, ListRow};
use super::state::ListViewState;
use crate::shared::api_error::ApiError;

/// `Idle -> Loading -> Loaded | Error`; `Loaded` and `Error` go back to
/// `Loading` on refresh or retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Issues monotonically increasing tickets; only the latest is current.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// View state plus load lifecycle for one screen.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    pub view: ListViewState<T>,
    load: LoadState,
    sequence: RequestSequence,
}

impl<T: ListRow> ListController<T> {
    pub fn new(chain: FilterChain, page_size: usize) -> Self {
        Self {
            view: ListViewState::new(chain, page_size),
            load: LoadState::Idle,
            sequence: RequestSequence::default(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Changes with every issued request, so rendered rows can be keyed per load.
    pub fn generation(&self) -> u64 {
        self.sequence.latest()
    }

    /// Enters `Loading` and returns the ticket the completion must present.
    pub fn begin_load(&mut self) -> RequestTicket {
        self.load = LoadState::Loading;
        self.sequence.issue()
    }

    /// Like [`Self::begin_load`], but refuses while a request is in flight so
    /// a second Refresh does not issue a redundant fetch.
    pub fn try_begin_load(&mut self) -> Option<RequestTicket> {
        if self.load.is_loading() {
            log::debug!("load already in flight");
            return None;
        }
        Some(self.begin_load())
    }

    /// Applies a completed fetch. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn finish_load(&mut self, ticket: RequestTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if !self.sequence.is_current(ticket) {
            log::debug!("discarding stale response {:?}", ticket);
            return false;
        }
        match result {
            Ok(rows) => {
                self.view.replace_source(rows);
                self.load = LoadState::Loaded;
            }
            Err(err) => {
                log::warn!("list load failed: {}", err);
                self.view.replace_source(Vec::new());
                self.load = LoadState::Error(err.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::filter::{FilterDef, Predicate};

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32);

    impl ListRow for Row {
        fn row_key(&self) -> String {
            self.0.to_string()
        }

        fn field_value(&self, field: &str) -> Option<String> {
            (field == "n").then(|| self.0.to_string())
        }
    }

    const CHAIN: FilterChain = &[FilterDef {
        key: "search",
        label: "Search",
        predicate: Predicate::Search(&["n"]),
    }];

    #[test]
    fn test_success_path() {
        let mut controller = ListController::new(CHAIN, 10);
        assert_eq!(controller.load_state(), &LoadState::Idle);

        let ticket = controller.begin_load();
        assert!(controller.load_state().is_loading());

        assert!(controller.finish_load(ticket, Ok(vec![Row(1), Row(2)])));
        assert_eq!(controller.load_state(), &LoadState::Loaded);
        assert_eq!(controller.view.page_rows().len(), 2);
    }

    #[test]
    fn test_failure_clears_rows() {
        let mut controller = ListController::new(CHAIN, 10);
        let ticket = controller.begin_load();
        controller.finish_load(ticket, Ok(vec![Row(1)]));

        let ticket = controller.begin_load();
        controller.finish_load(ticket, Err(ApiError::Network("offline".into())));
        assert_eq!(controller.load_state().error(), Some("Network error: offline"));
        assert!(controller.view.source().is_empty());
        assert!(controller.view.page_rows().is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = ListController::new(CHAIN, 10);
        let first = controller.begin_load();
        let second = controller.begin_load();

        assert!(controller.finish_load(second, Ok(vec![Row(2)])));
        assert!(!controller.finish_load(first, Ok(vec![Row(1), Row(1)])));

        assert_eq!(controller.view.source(), &[Row(2)]);
        assert_eq!(controller.load_state(), &LoadState::Loaded);
    }

    #[test]
    fn test_filters_survive_reload() {
        let mut controller = ListController::new(CHAIN, 10);
        controller.view.set_text("search", "2").unwrap();
        let ticket = controller.begin_load();
        controller.finish_load(ticket, Ok(vec![Row(1), Row(2), Row(12)]));
        assert_eq!(controller.view.filtered(), &[Row(2), Row(12)]);
    }

    #[test]
    fn test_no_concurrent_load_while_loading() {
        let mut controller = ListController::new(CHAIN, 10);
        let ticket = controller.try_begin_load().expect("idle list starts a load");
        assert!(controller.try_begin_load().is_none());
        assert_eq!(controller.generation(), 1);

        controller.finish_load(ticket, Err(ApiError::Network("offline".into())));
        let retry = controller.try_begin_load().expect("retry after an error");
        controller.finish_load(retry, Ok(vec![Row(3)]));
        assert!(controller.try_begin_load().is_some());
    }

    #[test]
    fn test_generation_advances_per_request() {
        let mut controller: ListController<Row> = ListController::new(CHAIN, 10);
        assert_eq!(controller.generation(), 0);
        controller.begin_load();
        let ticket = controller.begin_load();
        assert_eq!(controller.generation(), 2);
        controller.finish_load(ticket, Ok(vec![]));
        assert_eq!(controller.generation(), 2);
    }
}
