pub mod date_range_picker;
pub mod empty_table;
pub mod filter_panel;
pub mod pagination_controls;
pub mod status_tag;
