mod state;

use contracts::domain::a005_db_table::aggregate::TableRecord;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_db_table::api;
use crate::shared::components::filter_fields::SearchField;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::load_state_banner::LoadStateBanner;
use crate::shared::icons::icon;
use crate::shared::list_view::use_remote_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_session;
use state::{columns, PAGE_SIZE, TABLE_RECORD_FILTERS};

/// Raw rows of one table. Columns come from the first row of the response.
#[component]
pub fn DbTableRecords(#[prop(into)] table_name: String) -> impl IntoView {
    let session = use_session();
    let list = use_remote_list(
        api::table_records_source(session.client(), &table_name),
        TABLE_RECORD_FILTERS,
        PAGE_SIZE,
    );
    let filters_expanded = RwSignal::new(true);
    let column_names = Memo::new(move |_| list.state.with(|c| columns(c.view.source())));

    view! {
        <PageFrame page_id="a005_db_table--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{table_name.clone()}</h1>
                    <Badge>{move || format!("{} rows", list.pager().total_count)}</Badge>
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
                    on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                    page_size_options=vec![10, 25, 50]
                >
                    <SearchField list=list filter_key="search" placeholder="Any cell value..." />
                </FilterPanel>

                <div class="table-wrapper table-wrapper--scroll">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                {move || column_names.get().into_iter().map(|name| view! {
                                    <th>{name}</th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || list.keyed_page_rows()
                                key=|(key, _)| key.clone()
                                children=move |(_, record): (String, TableRecord)| {
                                    view! {
                                        <tr>
                                            <td class="data-table__index">{record.index + 1}</td>
                                            {column_names.get_untracked().into_iter().map(|name| {
                                                match record.cell(&name) {
                                                    Some(value) if value.is_null() => view! {
                                                        <td class="data-table__null">"NULL"</td>
                                                    }.into_any(),
                                                    Some(value) => view! {
                                                        <td title=value.display().to_string()>{value.display().to_string()}</td>
                                                    }.into_any(),
                                                    None => view! { <td></td> }.into_any(),
                                                }
                                            }).collect_view()}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || list.pager().total_count == 0 && !list.is_loading()>
                        <div class="table-empty">"No rows."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
