use crate::shared::icons::icon;
use crate::shared::list_view::StatusTone;
use leptos::prelude::*;

fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// `None` while loading or after a failed fetch
    #[prop(into)]
    value: Signal<Option<usize>>,
    #[prop(into, optional)] tone: MaybeProp<StatusTone>,
    /// Optional line below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match tone.get() {
        Some(StatusTone::Success) => "stat-card stat-card--success",
        Some(StatusTone::Error) => "stat-card stat-card--error",
        Some(StatusTone::Warning) => "stat-card stat-card--warning",
        _ => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "-".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
