pub mod state;

use contracts::domain::a001_tenant::aggregate::Tenant;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_tenant::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, tenant_detail_key};
use crate::shared::components::filter_fields::{ExactSelect, SearchField};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::load_state_banner::LoadStateBanner;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_view::{distinct_values, use_remote_list};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use state::{PAGE_SIZE, TENANT_FILTERS};

#[component]
pub fn TenantList() -> impl IntoView {
    let session = use_session();
    let tabs_store = expect_context::<AppGlobalContext>();
    let list = use_remote_list(api::tenants_source(session.client()), TENANT_FILTERS, PAGE_SIZE);
    let filters_expanded = RwSignal::new(true);

    let erp_options = Signal::derive(move || list.state.with(|c| distinct_values(c.view.source(), "erp")));
    let subscription_options =
        Signal::derive(move || list.state.with(|c| distinct_values(c.view.source(), "subscription")));

    let open_detail = move |tenant_id: &str| {
        let key = tenant_detail_key(tenant_id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <PageFrame page_id="a001_tenant--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tenants"</h1>
                    <Badge>{move || list.pager().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.reload()
                        disabled=Signal::derive(move || list.is_loading())
                    >
                        {icon("refresh")}
                        " Refresh"
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
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchField list=list filter_key="search" placeholder="Tenant name or ID..." />
                        <ExactSelect list=list filter_key="erp" label="ERP" options=erp_options />
                        <ExactSelect
                            list=list
                            filter_key="subscription"
                            label="Subscription"
                            options=subscription_options
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Tenant"</TableHeaderCell>
                                <TableHeaderCell>"Tenant ID"</TableHeaderCell>
                                <TableHeaderCell>"Subscription"</TableHeaderCell>
                                <TableHeaderCell>"ERP"</TableHeaderCell>
                                <TableHeaderCell>"Devices"</TableHeaderCell>
                                <TableHeaderCell>"Last sync"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.keyed_page_rows()
                                key=|(key, _)| key.clone()
                                children=move |(_, tenant): (String, Tenant)| {
                                    let tenant_id = tenant.tenant_id.clone();
                                    let devices = format!(
                                        "{} online / {} offline",
                                        tenant.online_devices, tenant.offline_devices,
                                    );
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(&tenant_id);
                                                        }
                                                    >
                                                        {tenant.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{tenant.tenant_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge raw=tenant.subscription.clone() />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{tenant.erp.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{devices}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{tenant.last_sync_display.clone()}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || list.pager().total_count == 0 && !list.is_loading()>
                        <div class="table-empty">"No tenants match the current filters."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
