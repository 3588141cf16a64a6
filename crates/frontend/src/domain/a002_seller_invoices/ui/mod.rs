pub mod confirm_invoice;
pub mod list;
