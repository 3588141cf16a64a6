//! API utilities for talking to the report GraphQL service
//!
//! Transport failures are returned as human-readable `String` errors.

use contracts::shared::graphql::{GraphQlRequest, GraphQlResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::GRAPHQL_PATH;

/// Get the base URL for API requests
///
/// The admin app is served from the same origin as its GraphQL endpoint.
///
/// # Returns
/// - Origin like "https://shop.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// POST a query or mutation and unwrap the GraphQL envelope
pub async fn post_graphql<V, T>(query: &'static str, variables: V) -> Result<T, String>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let body = GraphQlRequest { query, variables };

    let response = Request::post(&api_url(GRAPHQL_PATH))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: GraphQlResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    envelope.into_result()
}
