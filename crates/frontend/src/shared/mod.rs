pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod list_state;
pub mod modal;
