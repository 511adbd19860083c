//! Auth gate: the login page until a token is present, the main layout after.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::toast::ToastHost;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Sidebar and tabs. Opens the tab named in `?active=` (or the dashboard)
/// once on mount.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    tabs_store.init_router_integration();

    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any() />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
        <ToastHost />
    }
}
