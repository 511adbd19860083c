//! TabPage: renders one tab's content and hides it while inactive.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Content stays mounted while the tab is open, so switching tabs keeps
/// each screen's filters and page.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active.get().as_ref() == Some(&key_for_active);

    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || log::debug!("tab content dropped: {}", key_for_cleanup));

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

/// Clickable title with a close button.
#[component]
pub fn TabHeader(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();

    view! {
        <div
            class="tabs__header"
            class:tabs__header--active=is_active
            on:click=move |_| tabs_store.activate_tab(&key_for_click)
        >
            <span class="tabs__title">{tab.title}</span>
            <button
                class="tabs__close"
                on:click=move |ev| {
                    ev.stop_propagation();
                    tabs_store.close_tab(&key_for_close);
                }
            >
                "×"
            </button>
        </div>
    }
}
