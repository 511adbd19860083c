use crate::shared::icons::icon;
use crate::shared::list_view::PagerModel;
use leptos::prelude::*;

/// Prev / numbered pages / Next, plus an optional page-size selector.
#[component]
pub fn PaginationControls(
    #[prop(into)] pager: Signal<PagerModel>,

    /// Receives the 1-based page to show.
    on_page_change: Callback<usize>,

    #[prop(optional_no_strip)] on_page_size_change: Option<Callback<usize>>,

    #[prop(optional_no_strip)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let size_selector = on_page_size_change.map(|on_size| {
        let options = page_size_options.unwrap_or_else(|| vec![5, 10, 25]);
        view! {
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_size.run(size);
                    }
                }
                prop:value=move || pager.get().page_size.to_string()
            >
                {options.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || pager.get().page_size == size>
                        {format!("{} / page", size)}
                    </option>
                }).collect_view()}
            </select>
        }
    });

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pager.get_untracked();
                    if p.has_prev() {
                        on_page_change.run(p.page - 1);
                    }
                }
                disabled=move || !pager.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let p = pager.get();
                p.pages().map(|page| {
                    let class = if page == p.page {
                        "pagination-btn pagination-btn--active"
                    } else {
                        "pagination-btn"
                    };
                    view! {
                        <button class=class on:click=move |_| on_page_change.run(page)>
                            {page}
                        </button>
                    }
                }).collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pager.get_untracked();
                    if p.has_next() {
                        on_page_change.run(p.page + 1);
                    }
                }
                disabled=move || !pager.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || match pager.get().window() {
                    Some((first, last)) => format!("{}-{} of {}", first, last, pager.get().total_count),
                    None => "No rows".to_string(),
                }}
            </span>
            {size_selector}
        </div>
    }
}
