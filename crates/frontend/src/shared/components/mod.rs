pub mod filter_fields;
pub mod filter_panel;
pub mod load_state_banner;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
