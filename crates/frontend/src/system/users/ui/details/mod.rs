use contracts::system::users::{CreateUserDto, USER_ROLES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use crate::system::users::api;

/// Signup form. Validation runs before the request; failures show as toasts.
#[component]
pub fn CreateUserForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let form = RwSignal::new(CreateUserDto {
        role: USER_ROLES[USER_ROLES.len() - 1].to_string(),
        ..CreateUserDto::default()
    });
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut dto = form.get_untracked();
        dto.name = dto.name.trim().to_string();
        dto.email = dto.email.trim().to_string();

        if let Err(e) = dto.validate() {
            toasts.error(e.to_string());
            return;
        }

        set_is_saving.set(true);
        let client = session.client();
        spawn_local(async move {
            match api::create_user(&client, &dto).await {
                Ok(()) => {
                    toasts.success(format!("User {} created", dto.email));
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("signup for {} failed: {}", dto.email, e);
                    toasts.error(format!("Failed to create user: {}", e));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"New user"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <form on:submit=on_submit>
                    <div class="modal-body">
                        <div class="form__group">
                            <label class="form__label" for="user-name">"Name *"</label>
                            <input
                                type="text"
                                id="user-name"
                                class="form__input"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                disabled=move || is_saving.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="user-email">"Email *"</label>
                            <input
                                type="email"
                                id="user-email"
                                class="form__input"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                disabled=move || is_saving.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="user-password">"Password *"</label>
                            <input
                                type="password"
                                id="user-password"
                                class="form__input"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                disabled=move || is_saving.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="user-role">"Role *"</label>
                            <select
                                id="user-role"
                                class="form__select"
                                on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                                disabled=move || is_saving.get()
                            >
                                {USER_ROLES.iter().map(|role| view! {
                                    <option
                                        value=*role
                                        selected=move || form.with(|f| f.role == *role)
                                    >
                                        {*role}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="modal-footer">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_close.run(())
                            disabled=move || is_saving.get()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || is_saving.get()
                        >
                            {move || if is_saving.get() { "Saving..." } else { "Create user" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
