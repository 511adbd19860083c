use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cell::Cell;

use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;

/// Where a list screen gets its rows from.
#[async_trait(?Send)]
pub trait CollectionSource<T> {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<T>, ApiError>;
}

/// Turns a raw payload into rows; `now` is captured once per fetch.
pub type Normalizer<T> = fn(&Value, DateTime<Utc>) -> Vec<T>;

/// One HTTP GET followed by normalization.
pub struct RemoteCollection<T> {
    client: ApiClient,
    path: String,
    normalize: Normalizer<T>,
}

impl<T> RemoteCollection<T> {
    pub fn new(client: ApiClient, path: impl Into<String>, normalize: Normalizer<T>) -> Self {
        Self {
            client,
            path: path.into(),
            normalize,
        }
    }
}

#[async_trait(?Send)]
impl<T> CollectionSource<T> for RemoteCollection<T> {
    fn describe(&self) -> String {
        format!("GET {}", self.path)
    }

    async fn fetch(&self) -> Result<Vec<T>, ApiError> {
        let payload: Value = self.client.get_json(&self.path).await?;
        let rows = (self.normalize)(&payload, Utc::now());
        log::debug!("{} -> {} rows", self.describe(), rows.len());
        Ok(rows)
    }
}

/// Static source answering every fetch with the same result. Counts calls so
/// that retries can be observed.
pub struct FixtureSource<T> {
    result: Result<Vec<T>, ApiError>,
    calls: Cell<usize>,
}

impl<T: Clone> FixtureSource<T> {
    pub fn rows(rows: Vec<T>) -> Self {
        Self {
            result: Ok(rows),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            result: Err(error),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl<T: Clone> CollectionSource<T> for FixtureSource<T> {
    fn describe(&self) -> String {
        "fixture".to_string()
    }

    async fn fetch(&self) -> Result<Vec<T>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::fetch::{ListController, LoadState};
    use crate::shared::list_view::filter::{FilterChain, FilterDef, ListRow, Predicate};
    use futures::executor::block_on;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str);

    impl ListRow for Row {
        fn row_key(&self) -> String {
            self.0.to_string()
        }

        fn field_value(&self, _field: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    const CHAIN: FilterChain = &[FilterDef {
        key: "search",
        label: "Search",
        predicate: Predicate::Search(&["name"]),
    }];

    fn run<S: CollectionSource<Row>>(controller: &mut ListController<Row>, source: &S) {
        let ticket = controller.begin_load();
        let result = block_on(source.fetch());
        controller.finish_load(ticket, result);
    }

    #[test]
    fn test_fixture_rows_flow_into_controller() {
        let source = FixtureSource::rows(vec![Row("a"), Row("b")]);
        let mut controller = ListController::new(CHAIN, 10);
        run(&mut controller, &source);
        assert_eq!(controller.load_state(), &LoadState::Loaded);
        assert_eq!(controller.view.source().len(), 2);
    }

    #[test]
    fn test_retry_reissues_the_same_request() {
        let source = FixtureSource::failing(ApiError::Status {
            status: 503,
            message: "maintenance".into(),
        });
        let mut controller = ListController::new(CHAIN, 10);

        run(&mut controller, &source);
        let first_error = controller.load_state().clone();
        assert!(first_error.error().is_some());
        assert!(controller.view.page_rows().is_empty());

        run(&mut controller, &source);
        assert_eq!(source.calls(), 2);
        assert_eq!(controller.load_state(), &first_error);
    }
}
