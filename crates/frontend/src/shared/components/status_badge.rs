use leptos::prelude::*;

use crate::shared::list_view::project_status;

#[component]
pub fn StatusBadge(#[prop(into)] raw: String) -> impl IntoView {
    let projection = project_status(&raw);
    let class = projection.style_class();
    let label = projection.label;
    view! {
        <span class=class>{label}</span>
    }
}
