use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_view::PagerModel;
use leptos::prelude::*;

/// Collapsible filter panel with the pager in its header. Children are the
/// filter inputs.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,

    /// Shown as a badge next to the title.
    #[prop(into)]
    active_filters_count: Signal<usize>,

    on_reset: Callback<()>,

    #[prop(into)] pager: Signal<PagerModel>,

    on_page_change: Callback<usize>,

    #[prop(optional)] on_page_size_change: Option<Callback<usize>>,

    #[prop(optional)] page_size_options: Option<Vec<usize>>,

    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| is_expanded.update(|e| *e = !*e);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        pager=pager
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                        page_size_options=page_size_options
                    />
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--ghost"
                        on:click=move |_| on_reset.run(())
                        disabled=move || active_filters_count.get() == 0
                    >
                        "Reset"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}
