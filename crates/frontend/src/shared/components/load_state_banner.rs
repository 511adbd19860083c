use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::list_view::LoadState;

/// Spinner while loading; error message with a Retry button on failure.
#[component]
pub fn LoadStateBanner(
    #[prop(into)] state: Signal<LoadState>,
    on_retry: Callback<()>,
) -> impl IntoView {
    move || match state.get() {
        LoadState::Loading => view! {
            <div class="load-state load-state--loading">
                <Spinner />
                <span>"Loading..."</span>
            </div>
        }
        .into_any(),
        LoadState::Error(message) => view! {
            <div class="alert alert--error">
                <span>{message}</span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| on_retry.run(())
                >
                    {icon("refresh")}
                    " Retry"
                </Button>
            </div>
        }
        .into_any(),
        LoadState::Idle | LoadState::Loaded => ().into_any(),
    }
}
