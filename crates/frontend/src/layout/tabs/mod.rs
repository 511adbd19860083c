//! Tabs of the center area.
//!
//! - `page`: tab header and the container that keeps content mounted
//! - `registry`: tab key to view mapping
//! - `tab_labels`: tab titles and detail key builders

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::{TabHeader, TabPage};
pub use tab_labels::{db_table_key, detail_tab_label, device_log_key, tab_label_for_key, tenant_detail_key};
