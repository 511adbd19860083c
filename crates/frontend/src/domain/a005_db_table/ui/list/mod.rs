pub mod state;

use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_db_table::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{db_table_key, tab_label_for_key};
use crate::shared::components::filter_fields::SearchField;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::load_state_banner::LoadStateBanner;
use crate::shared::icons::icon;
use crate::shared::list_view::use_remote_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use state::{TableName, PAGE_SIZE, TABLE_NAME_FILTERS};

/// Index of the raw tables exposed by the sync backend.
#[component]
pub fn DbTableList() -> impl IntoView {
    let session = use_session();
    let tabs_store = expect_context::<AppGlobalContext>();
    let list = use_remote_list(api::table_names_source(session.client()), TABLE_NAME_FILTERS, PAGE_SIZE);
    let filters_expanded = RwSignal::new(true);

    let open_table = move |name: &str| {
        let key = db_table_key(name);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <PageFrame page_id="a005_db_table--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tables"</h1>
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
                    <SearchField list=list filter_key="search" placeholder="Table name..." />
                </FilterPanel>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Table"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.keyed_page_rows()
                            key=|(key, _)| key.clone()
                            children=move |(_, table): (String, TableName)| {
                                let name = table.0.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        open_table(&name);
                                                    }
                                                >
                                                    {icon("database")}
                                                    " "
                                                    {table.0.clone()}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
