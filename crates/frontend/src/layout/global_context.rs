use leptos::prelude::*;
use std::borrow::Cow;
use web_sys::window;

use super::tabs::tab_label_for_key;

const ACTIVE_PARAM: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Open tabs, the active tab and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named by `?active=` and keeps the URL in step with
    /// the active tab afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match active_from_query(&search) {
            Some(key) => {
                let title = tab_label_for_key(&key);
                self.open_tab(&key, &title);
            }
            None => self.open_tab("d400_overview", &tab_label_for_key("d400_overview")),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = query_for_active(&active_key);
            let Some(w) = window() else {
                return;
            };
            let current_search = w.location().search().unwrap_or_default();
            if current_search != new_url {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab {}", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab {}", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Drops every tab; used on sign-out.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Value of `active` in a `?a=b&c=d` query string, percent-decoded.
pub fn active_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == ACTIVE_PARAM)
        .and_then(|(_, value)| {
            urlencoding::decode(&value.replace('+', " "))
                .ok()
                .map(Cow::into_owned)
        })
        .filter(|value| !value.is_empty())
}

pub fn query_for_active(key: &str) -> String {
    format!("?{}={}", ACTIVE_PARAM, urlencoding::encode(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(active_from_query("?active=a002_device").as_deref(), Some("a002_device"));
        assert_eq!(
            active_from_query("?x=1&active=a005_db_table_sales%20orders").as_deref(),
            Some("a005_db_table_sales orders")
        );
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn test_query_round_trips_detail_keys() {
        let key = "a004_device_log_dev/7";
        assert_eq!(active_from_query(&query_for_active(key)).as_deref(), Some(key));
    }
}
