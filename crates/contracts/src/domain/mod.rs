pub mod a001_seller_orders;
pub mod a002_seller_invoices;
pub mod a003_sellers;
