pub mod list;
pub mod rate_details;
