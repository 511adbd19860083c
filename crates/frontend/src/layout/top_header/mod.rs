//! TopHeader: sidebar toggle, application title and sign-out.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        log::info!("signing out");
        ctx.close_all();
        session.logout();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Tappy Admin"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
