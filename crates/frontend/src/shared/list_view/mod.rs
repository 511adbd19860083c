//! Client-side list view engine shared by every table screen:
//! fetch, predicate filter chain, paginator and status projection.

pub mod fetch;
pub mod filter;
pub mod hook;
pub mod paginator;
pub mod source;
pub mod state;
pub mod status;

pub use fetch::{ListController, LoadState, RequestSequence, RequestTicket};
pub use filter::{
    apply_filters, distinct_values, FilterChain, FilterDef, FilterError, FilterValue, Filters,
    ListRow, Predicate,
};
pub use hook::{use_remote_list, RemoteList};
pub use paginator::PagerModel;
pub use source::{CollectionSource, FixtureSource, RemoteCollection};
pub use state::ListViewState;
pub use status::{project_status, StatusProjection, StatusTone};
