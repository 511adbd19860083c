mod state;

use contracts::system::users::{User, USER_ROLES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::filter_fields::{ExactSelect, SearchField};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::load_state_banner::LoadStateBanner;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_view::{distinct_values, use_remote_list};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use crate::system::users::api;
use state::{PAGE_SIZE, PAGE_SIZE_OPTIONS, USER_FILTERS};

fn confirm_delete(user: &User) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("Delete user {} ({})?", user.name, user.email))
                .ok()
        })
        .unwrap_or(false)
}

#[component]
pub fn UsersList() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let list = use_remote_list(api::users_source(session.client()), USER_FILTERS, PAGE_SIZE);
    let filters_expanded = RwSignal::new(true);
    let (show_create_form, set_show_create_form) = signal(false);
    let (deleting, set_deleting) = signal::<Option<String>>(None);

    let role_options = Signal::derive(|| USER_ROLES.iter().map(|r| r.to_string()).collect::<Vec<_>>());
    let status_options =
        Signal::derive(move || list.state.with(|c| distinct_values(c.view.source(), "status")));

    let delete_user = move |user: User| {
        if !confirm_delete(&user) {
            return;
        }
        set_deleting.set(Some(user.id.clone()));
        let client = session.client();
        spawn_local(async move {
            match api::delete_user(&client, &user.id).await {
                Ok(()) => {
                    toasts.success(format!("User {} deleted", user.email));
                    list.refetch();
                }
                Err(e) => {
                    log::warn!("delete user {} failed: {}", user.id, e);
                    toasts.error(format!("Failed to delete user: {}", e));
                }
            }
            set_deleting.set(None);
        });
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || list.pager().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " New user"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.reload()
                        disabled=Signal::derive(move || list.is_loading())
                    >
                        {icon("refresh")}
                        {move || if list.is_loading() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <LoadStateBanner
                    state=Signal::derive(move || list.load_state())
                    on_retry=Callback::new(move |_| list.reload())
                />

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || list.active_filter_count())
                    on_reset=Callback::new(move |_| list.reset_filters())
                    pager=Signal::derive(move || list.pager())
                    on_page_change=Callback::new(move |page| list.set_page(page))
                    on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                    page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchField list=list filter_key="search" placeholder="Name or email..." />
                        <ExactSelect list=list filter_key="role" label="Role" options=role_options />
                        <ExactSelect list=list filter_key="status" label="Status" options=status_options />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Last login"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.keyed_page_rows()
                                key=|(key, _)| key.clone()
                                children=move |(_, user): (String, User)| {
                                    let user_id = user.id.clone();
                                    let user_for_delete = user.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge raw=user.role.clone() />
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge raw=user.status.clone() />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{user.last_login_display.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| delete_user(user_for_delete.clone())
                                                    disabled=Signal::derive(move || {
                                                        deleting.get().as_deref() == Some(user_id.as_str())
                                                    })
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || show_create_form.get()>
                    <super::details::CreateUserForm
                        on_close=Callback::new(move |_| set_show_create_form.set(false))
                        on_created=Callback::new(move |_| {
                            set_show_create_form.set(false);
                            list.refetch();
                        })
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
