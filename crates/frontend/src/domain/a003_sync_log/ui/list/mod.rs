mod state;

use std::collections::HashSet;

use contracts::domain::a003_sync_log::aggregate::SyncLogEntry;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_sync_log::api;
use crate::shared::components::filter_fields::{DateRangeFilter, ExactSelect, SearchField};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::load_state_banner::LoadStateBanner;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_view::use_remote_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use state::{DIRECTIONS, PAGE_SIZE, SYNC_LOG_FILTERS};

#[component]
pub fn SyncLogList() -> impl IntoView {
    let session = use_session();
    let list = use_remote_list(api::sync_logs_source(session.client()), SYNC_LOG_FILTERS, PAGE_SIZE);
    let filters_expanded = RwSignal::new(true);
    let expanded: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let direction_options = Signal::derive(|| DIRECTIONS.iter().map(|d| d.to_string()).collect::<Vec<_>>());

    let toggle = move |id: String| {
        expanded.update(|open| {
            if !open.remove(&id) {
                open.insert(id);
            }
        });
    };

    view! {
        <PageFrame page_id="a003_sync_log--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sync logs"</h1>
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
                        <SearchField list=list filter_key="search" placeholder="Device ID or table..." />
                        <ExactSelect list=list filter_key="direction" label="Direction" options=direction_options />
                        <DateRangeFilter list=list filter_key="synced_at" label="Synced" />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell attr:style="width: 32px;">""</TableHeaderCell>
                                <TableHeaderCell>"Device ID"</TableHeaderCell>
                                <TableHeaderCell>"Direction"</TableHeaderCell>
                                <TableHeaderCell>"Table"</TableHeaderCell>
                                <TableHeaderCell>"Records"</TableHeaderCell>
                                <TableHeaderCell>"Synced at"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.keyed_page_rows()
                                key=|(key, _)| key.clone()
                                children=move |(_, entry): (String, SyncLogEntry)| {
                                    let id = entry.id.clone();
                                    let id_for_toggle = id.clone();
                                    let is_open = move || expanded.with(|open| open.contains(&id));
                                    let is_open_icon = is_open.clone();
                                    let record_count = entry.record_count();
                                    let SyncLogEntry {
                                        device_id,
                                        direction,
                                        table_name,
                                        record_ids,
                                        synced_at_display,
                                        ..
                                    } = entry;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <button
                                                    class="button button--ghost button--icon"
                                                    on:click=move |_| toggle(id_for_toggle.clone())
                                                    title="Record IDs"
                                                >
                                                    {move || if is_open_icon() { icon("chevron-down") } else { icon("chevron-right") }}
                                                </button>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{device_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge raw=direction />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{table_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{record_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{synced_at_display}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                        <Show when=is_open>
                                            <tr class="table__detail-row">
                                                <td colspan="6">
                                                    {if record_ids.is_empty() {
                                                        view! { <span class="text-muted">"No record IDs"</span> }.into_any()
                                                    } else {
                                                        view! {
                                                            <div class="record-id-list">
                                                                {record_ids.iter().map(|rid| view! {
                                                                    <code class="record-id">{rid.clone()}</code>
                                                                }).collect_view()}
                                                            </div>
                                                        }.into_any()
                                                    }}
                                                </td>
                                            </tr>
                                        </Show>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || list.pager().total_count == 0 && !list.is_loading()>
                        <div class="table-empty">"No sync activity matches the current filters."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
