pub mod state;

use contracts::domain::a002_device::aggregate::Device;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_device::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{device_log_key, tab_label_for_key};
use crate::shared::components::filter_fields::{DateRangeFilter, ExactSelect, SearchField};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::load_state_banner::LoadStateBanner;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_view::{distinct_values, use_remote_list};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use crate::usecases::u501_manual_sync::ManualSyncModal;
use state::{DEVICE_FILTERS, PAGE_SIZE};

#[component]
pub fn DeviceList() -> impl IntoView {
    let session = use_session();
    let tabs_store = expect_context::<AppGlobalContext>();
    let list = use_remote_list(api::devices_source(session.client()), DEVICE_FILTERS, PAGE_SIZE);
    let filters_expanded = RwSignal::new(true);
    let sync_target: RwSignal<Option<String>> = RwSignal::new(None);

    let tenant_options =
        Signal::derive(move || list.state.with(|c| distinct_values(c.view.source(), "tenant_name")));
    let status_options = Signal::derive(|| vec!["Online".to_string(), "Offline".to_string()]);

    let open_logs = move |device_id: &str| {
        let key = device_log_key(device_id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <PageFrame page_id="a002_device--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Devices"</h1>
                    <Badge>{move || list.pager().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
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
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchField
                            list=list
                            filter_key="search"
                            placeholder="Device name, device ID, tenant..."
                        />
                        <ExactSelect list=list filter_key="tenant" label="Tenant" options=tenant_options />
                        <ExactSelect list=list filter_key="status" label="Status" options=status_options />
                        <DateRangeFilter list=list filter_key="last_seen" label="Last seen" />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Device"</TableHeaderCell>
                                <TableHeaderCell>"Device ID"</TableHeaderCell>
                                <TableHeaderCell>"Tenant"</TableHeaderCell>
                                <TableHeaderCell>"Paired with"</TableHeaderCell>
                                <TableHeaderCell>"Last seen"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Sync"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.keyed_page_rows()
                                key=|(key, _)| key.clone()
                                children=move |(_, device): (String, Device)| {
                                    let id_for_logs = device.device_id.clone();
                                    let id_for_sync = device.device_id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{device.device_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{device.device_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{device.tenant_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{device.paired_with.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{device.last_seen_display.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge raw=device.status.as_str() />
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge raw=device.sync_status.clone() />
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| open_logs(&id_for_logs)
                                                        attr:title="Device logs"
                                                    >
                                                        {icon("file-text")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| sync_target.set(Some(id_for_sync.clone()))
                                                        attr:title="Manual sync"
                                                    >
                                                        {icon("sync")}
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || list.state.with(|c| c.view.filtered().is_empty() && !c.load_state().is_loading())>
                        <div class="table-empty">"No devices match the current filters."</div>
                    </Show>
                </div>

                {move || sync_target.get().map(|device_id| view! {
                    <ManualSyncModal
                        device_id=device_id
                        on_close=Callback::new(move |_| sync_target.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
