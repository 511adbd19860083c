use contracts::usecases::u501_manual_sync::{ManualSyncRequest, SyncDataType, SyncMethod};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Manual sync dialog for one device. Closes itself after a successful
/// request; failures keep it open so the operator can retry.
#[component]
pub fn ManualSyncModal(#[prop(into)] device_id: String, on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let form = RwSignal::new(ManualSyncRequest::for_device(device_id));
    let notes = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |_| {
        let mut request = form.get_untracked();
        request.device_id = request.device_id.trim().to_string();
        let note = notes.get_untracked();
        request.notes = Some(note.trim().to_string()).filter(|n| !n.is_empty());

        if let Err(e) = request.validate() {
            toasts.error(e.to_string());
            return;
        }

        set_submitting.set(true);
        let client = session.client();
        spawn_local(async move {
            match api::trigger_manual_sync(&client, &request).await {
                Ok(message) => {
                    toasts.success(message);
                    on_close.run(());
                }
                Err(e) => {
                    log::warn!("manual sync for {} failed: {}", request.device_id, e);
                    toasts.error(format!("Manual sync failed: {}", e));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Manual sync"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <label for="manual-sync-device">"Device ID"</label>
                        <input
                            id="manual-sync-device"
                            class="form__input"
                            prop:value=move || form.with(|f| f.device_id.clone())
                            on:input=move |ev| form.update(|f| f.device_id = event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </div>

                    <fieldset class="form__group">
                        <legend>"Data types"</legend>
                        {SyncDataType::ALL.into_iter().map(|data_type| view! {
                            <label class="form__check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.data_types.contains(&data_type))
                                    on:change=move |_| form.update(|f| f.toggle(data_type))
                                    disabled=move || submitting.get()
                                />
                                {data_type.label()}
                            </label>
                        }).collect_view()}
                    </fieldset>

                    <fieldset class="form__group">
                        <legend>"Method"</legend>
                        {[SyncMethod::Full, SyncMethod::Delta].into_iter().map(|method| view! {
                            <label class="form__check">
                                <input
                                    type="radio"
                                    name="manual-sync-method"
                                    prop:checked=move || form.with(|f| f.sync_method == method)
                                    on:change=move |_| form.update(|f| f.sync_method = method)
                                    disabled=move || submitting.get()
                                />
                                {method.label()}
                            </label>
                        }).collect_view()}
                    </fieldset>

                    <label class="form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.force_erp_resend)
                            on:change=move |ev| form.update(|f| f.force_erp_resend = event_target_checked(&ev))
                            disabled=move || submitting.get()
                        />
                        "Force resend to ERP"
                    </label>

                    <div class="form__group">
                        <label for="manual-sync-notes">"Notes"</label>
                        <textarea
                            id="manual-sync-notes"
                            class="form__textarea"
                            rows="3"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        ></textarea>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || submitting.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || if submitting.get() { "Starting..." } else { "Start sync" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
