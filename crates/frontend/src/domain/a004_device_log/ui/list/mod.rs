mod state;

use contracts::domain::a004_device_log::aggregate::DeviceLogEntry;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_device_log::api;
use crate::shared::components::filter_fields::{ExactSelect, SearchField};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::load_state_banner::LoadStateBanner;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_view::{distinct_values, use_remote_list};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_session;
use state::{DEVICE_LOG_FILTERS, PAGE_SIZE, RESOLUTION_OPTIONS};

/// Diagnostic log of a single device, opened from the device list.
#[component]
pub fn DeviceLogList(#[prop(into)] device_id: String) -> impl IntoView {
    let session = use_session();
    let list = use_remote_list(
        api::device_logs_source(session.client(), &device_id),
        DEVICE_LOG_FILTERS,
        PAGE_SIZE,
    );
    let filters_expanded = RwSignal::new(true);

    let level_options =
        Signal::derive(move || list.state.with(|c| distinct_values(c.view.source(), "log_level")));
    let resolution_options =
        Signal::derive(|| RESOLUTION_OPTIONS.iter().map(|o| o.to_string()).collect::<Vec<_>>());

    view! {
        <PageFrame page_id="a004_device_log--list" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Device logs"</h1>
                    <span class="page__subtitle">{device_id.clone()}</span>
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
                        <SearchField list=list filter_key="search" placeholder="Message or screen..." />
                        <ExactSelect list=list filter_key="level" label="Level" options=level_options />
                        <ExactSelect
                            list=list
                            filter_key="resolved"
                            label="Resolution"
                            options=resolution_options
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Time"</TableHeaderCell>
                                <TableHeaderCell>"Level"</TableHeaderCell>
                                <TableHeaderCell>"Screen"</TableHeaderCell>
                                <TableHeaderCell>"Message"</TableHeaderCell>
                                <TableHeaderCell>"Device info"</TableHeaderCell>
                                <TableHeaderCell>"Resolution"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.keyed_page_rows()
                                key=|(key, _)| key.clone()
                                children=move |(_, entry): (String, DeviceLogEntry)| {
                                    let resolution = entry.resolved_label();
                                    let DeviceLogEntry {
                                        date_time_display,
                                        location_screen,
                                        log_message,
                                        log_level,
                                        device_info,
                                        ..
                                    } = entry;
                                    let message_title = log_message.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{date_time_display}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge raw=log_level />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{location_screen}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class="log-message" title=message_title>
                                                    {log_message}
                                                </span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{device_info}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge raw=resolution />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || list.pager().total_count == 0 && !list.is_loading()>
                        <div class="table-empty">"No log entries for this device."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
