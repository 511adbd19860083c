use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::toast::ToastService;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("api base: {}", config.api_base);

    provide_context(SessionContext::new(config));
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <AppShell />
    }
}
