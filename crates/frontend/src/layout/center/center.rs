use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::{TabHeader, TabPage};
use leptos::prelude::*;

/// Tab strip on top, the open tabs' content below it.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__strip">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabHeader tab=tab tabs_store=tabs_store /> }
                />
            </div>
            <Show
                when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())
                fallback=|| view! { <div class="tabs__empty">"Pick a section in the menu."</div> }
            >
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </Show>
        </div>
    }
}
