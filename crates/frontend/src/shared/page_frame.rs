//! PageFrame: root wrapper for every page rendered inside a tab.

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id`, `data-page-category` and the BEM modifier class:
/// - `list`, `system` → `page`
/// - `detail`         → `page page--detail`
/// - `dashboard`      → `page page--dashboard`
#[component]
pub fn PageFrame(
    /// `{screen}--{category}`, e.g. `"a002_device--list"`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) {
        log::warn!("page id {} does not follow screen--category", page_id);
    }
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
