pub mod api;
pub mod confirm_gate;
pub mod ui;
