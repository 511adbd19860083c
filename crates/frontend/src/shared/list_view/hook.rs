use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::fetch::{ListController, LoadState, RequestTicket};
use super::filter::{FilterChain, ListRow};
use super::paginator::PagerModel;
use super::source::CollectionSource;

/// Reactive handle tying a [`ListController`] to its data source.
pub struct RemoteList<T: 'static> {
    pub state: RwSignal<ListController<T>>,
    source: StoredValue<Rc<dyn CollectionSource<T>>, LocalStorage>,
}

impl<T: 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteList<T> {}

impl<T> RemoteList<T>
where
    T: ListRow + Send + Sync,
{
    pub fn new(source: impl CollectionSource<T> + 'static, chain: FilterChain, page_size: usize) -> Self {
        let source: Rc<dyn CollectionSource<T>> = Rc::new(source);
        Self {
            state: RwSignal::new(ListController::new(chain, page_size)),
            source: StoredValue::new_local(source),
        }
    }

    /// Issues a fresh request unless one is already in flight.
    pub fn reload(&self) {
        if let Some(ticket) = self.state.try_update(|c| c.try_begin_load()).flatten() {
            self.spawn_fetch(ticket);
        }
    }

    /// Re-fetches after a mutation; a request still in flight becomes stale.
    pub fn refetch(&self) {
        if let Some(ticket) = self.state.try_update(|c| c.begin_load()) {
            self.spawn_fetch(ticket);
        }
    }

    fn spawn_fetch(&self, ticket: RequestTicket) {
        let source = self.source.get_value();
        let state = self.state;
        log::debug!("loading {}", source.describe());
        spawn_local(async move {
            let result = source.fetch().await;
            // The screen may have been closed while the request was in flight.
            let _ = state.try_update(|c| c.finish_load(ticket, result));
        });
    }

    pub fn load_state(&self) -> LoadState {
        self.state.with(|c| c.load_state().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|c| c.load_state().is_loading())
    }

    /// Current page paired with keys that are unique per load, for `<For>`.
    pub fn keyed_page_rows(&self) -> Vec<(String, T)> {
        self.state.with(|c| {
            let generation = c.generation();
            c.view
                .page_rows()
                .iter()
                .map(|row| (format!("{}#{}", generation, row.row_key()), row.clone()))
                .collect()
        })
    }

    pub fn pager(&self) -> PagerModel {
        self.state.with(|c| c.view.pager())
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.with(|c| c.view.filters().active_count())
    }

    pub fn text(&self, key: &str) -> String {
        self.state.with(|c| c.view.filters().text(key).to_string())
    }

    pub fn range(&self, key: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
        self.state.with(|c| c.view.filters().get(key).as_range())
    }

    /// Subscribers are only notified when the filter value actually changed.
    pub fn set_text(&self, key: &str, value: String) {
        self.state.maybe_update(|c| match c.view.set_text(key, value) {
            Ok(changed) => changed,
            Err(err) => {
                log::warn!("{}", err);
                false
            }
        });
    }

    pub fn set_range(&self, key: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.state.maybe_update(|c| match c.view.set_range(key, from, to) {
            Ok(changed) => changed,
            Err(err) => {
                log::warn!("{}", err);
                false
            }
        });
    }

    pub fn reset_filters(&self) {
        self.state.update(|c| c.view.reset_filters());
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|c| c.view.set_page(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.state.update(|c| c.view.set_page_size(page_size));
    }
}

/// Creates the list and starts the first load once the screen mounts.
pub fn use_remote_list<T>(
    source: impl CollectionSource<T> + 'static,
    chain: FilterChain,
    page_size: usize,
) -> RemoteList<T>
where
    T: ListRow + Send + Sync,
{
    let list = RemoteList::new(source, chain, page_size);
    Effect::new(move |_| list.reload());
    list
}
