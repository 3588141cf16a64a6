pub mod dates;
pub mod email;
pub mod graphql;
pub mod order_status;
pub mod query_params;
pub mod seller_filter;
