//! Sidebar with collapsible menu groups. Every item opens (or focuses) a tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "dashboard",
            items: vec![("d400_overview", "dashboard")],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "activity",
            items: vec![
                ("a001_tenant", "tenants"),
                ("a002_device", "devices"),
                ("a003_sync_log", "sync"),
            ],
        },
        MenuGroup {
            id: "data",
            label: "Data",
            icon: "database",
            items: vec![("a005_db_table", "database")],
        },
        MenuGroup {
            id: "system",
            label: "System",
            icon: "users",
            items: vec![("sys_users", "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let expanded_groups = RwSignal::new(
        menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let gid_click = group.id.to_string();
                let gid_exp = group.id.to_string();
                let gid_show = group.id.to_string();
                let items = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |open| {
                                    if let Some(pos) = open.iter().position(|x| x == &gid) {
                                        open.remove(pos);
                                    } else {
                                        open.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    let label_for_click = label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, &label_for_click)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_key_has_a_label() {
        for group in menu_groups() {
            for (key, _) in group.items {
                assert_ne!(tab_label_for_key(key), key, "missing label for {}", key);
            }
        }
    }
}
