//! Inputs bound to one key of a list's filter chain.

use leptos::prelude::*;

use crate::shared::date_utils::{format_input_date, parse_input_date};
use crate::shared::list_view::{ListRow, RemoteList};

/// Free-text search; every keystroke narrows the list.
#[component]
pub fn SearchField<T>(
    list: RemoteList<T>,
    filter_key: &'static str,
    #[prop(into)] placeholder: String,
) -> impl IntoView
where
    T: ListRow + Send + Sync,
{
    view! {
        <div class="filter-field filter-field--search">
            <input
                type="search"
                class="form__input"
                placeholder=placeholder
                prop:value=move || list.text(filter_key)
                on:input=move |ev| list.set_text(filter_key, event_target_value(&ev))
            />
        </div>
    }
}

/// Dropdown; the empty option means "no constraint".
#[component]
pub fn ExactSelect<T>(
    list: RemoteList<T>,
    filter_key: &'static str,
    #[prop(into)] label: String,
    /// Option values, shown as-is.
    #[prop(into)]
    options: Signal<Vec<String>>,
) -> impl IntoView
where
    T: ListRow + Send + Sync,
{
    let any_label = format!("All {}", label.to_lowercase());

    view! {
        <div class="filter-field">
            <label class="filter-field__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || list.text(filter_key)
                on:change=move |ev| list.set_text(filter_key, event_target_value(&ev))
            >
                <option value="">{any_label}</option>
                {move || options.get().into_iter().map(|value| {
                    let option_value = value.clone();
                    let selected_value = value.clone();
                    view! {
                        <option
                            value=option_value
                            selected=move || list.text(filter_key) == selected_value
                        >
                            {value}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Two native date pickers forming an inclusive range.
#[component]
pub fn DateRangeFilter<T>(
    list: RemoteList<T>,
    filter_key: &'static str,
    #[prop(into)] label: String,
) -> impl IntoView
where
    T: ListRow + Send + Sync,
{
    let from_value = move || format_input_date(list.range(filter_key).0);
    let to_value = move || format_input_date(list.range(filter_key).1);

    view! {
        <div class="filter-field filter-field--date-range">
            <label class="filter-field__label">{label}</label>
            <input
                type="date"
                class="form__input"
                prop:value=from_value
                on:input=move |ev| {
                    let (_, to) = list.range(filter_key);
                    list.set_range(filter_key, parse_input_date(&event_target_value(&ev)), to);
                }
            />
            <span class="filter-field__separator">"to"</span>
            <input
                type="date"
                class="form__input"
                prop:value=to_value
                on:input=move |ev| {
                    let (from, _) = list.range(filter_key);
                    list.set_range(filter_key, from, parse_input_date(&event_target_value(&ev)));
                }
            />
        </div>
    }
}
