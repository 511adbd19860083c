use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_error::ApiError;
use crate::shared::toast::use_toasts;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(e) = request.validate() {
            toasts.error(e.to_string());
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let client = session.client();
        spawn_local(async move {
            match api::login(&client, &request).await {
                Ok(response) => {
                    if !session.login(&response.token) {
                        set_error_message.set(Some("The server returned an empty token.".into()));
                    }
                }
                Err(ApiError::Unauthorized) => {
                    set_error_message.set(Some("Invalid email or password.".into()));
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error_message.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Tappy Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate=true>
                    <div class="form__group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
