mod state;

use contracts::domain::a002_device::aggregate::Device;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_device::api::PairedDevicesSource;
use crate::shared::components::filter_fields::{ExactSelect, SearchField};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::load_state_banner::LoadStateBanner;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_view::use_remote_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_session;
use crate::usecases::u501_manual_sync::ManualSyncModal;
use state::{PAGE_SIZE, PAIRED_DEVICE_FILTERS};

/// Devices paired under one tenant. Each pairing shows up once per side.
#[component]
pub fn TenantDetail(#[prop(into)] tenant_id: String) -> impl IntoView {
    let session = use_session();
    let source = PairedDevicesSource::new(session.client(), tenant_id.clone());
    let list = use_remote_list(source, PAIRED_DEVICE_FILTERS, PAGE_SIZE);
    let filters_expanded = RwSignal::new(false);
    let sync_target: RwSignal<Option<String>> = RwSignal::new(None);
    let status_options = Signal::derive(|| vec!["Online".to_string(), "Offline".to_string()]);

    view! {
        <PageFrame page_id="a001_tenant--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tenant " {tenant_id.clone()}</h1>
                    <Badge>{move || format!("{} paired devices", list.pager().total_count)}</Badge>
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
                        <SearchField list=list filter_key="search" placeholder="Device or partner..." />
                        <ExactSelect list=list filter_key="status" label="Status" options=status_options />
                    </Flex>
                </FilterPanel>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Device"</TableHeaderCell>
                            <TableHeaderCell>"Device ID"</TableHeaderCell>
                            <TableHeaderCell>"Paired with"</TableHeaderCell>
                            <TableHeaderCell>"Paired at"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.keyed_page_rows()
                            key=|(key, _)| key.clone()
                            children=move |(_, device): (String, Device)| {
                                let device_id = device.device_id.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{device.device_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{device.device_id.clone()}</TableCellLayout>
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
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| sync_target.set(Some(device_id.clone()))
                                            >
                                                {icon("sync")}
                                                " Sync"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <Show when=move || list.pager().total_count == 0 && !list.is_loading()>
                    <div class="table-empty">"This tenant has no paired devices."</div>
                </Show>

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
