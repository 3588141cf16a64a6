//! Client configuration assembled once at mount
//!
//! Host context (account, preselected seller) arrives through the page query string.

use serde::Deserialize;

use crate::shared::list_state::{encode_host_params, FilterCriteria, ListScope, PAGE_SIZE_OPTIONS};

pub const GRAPHQL_PATH: &str = "/_v/graphql";

/// Parameters the host environment may put in the query string
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostQuery {
    pub account: Option<String>,
    pub seller_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub account: Option<String>,
    pub seller_name: Option<String>,
    pub page_size_options: Vec<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            account: None,
            seller_name: None,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl AppConfig {
    /// Build from a `?a=b` query string. Blank values count as absent.
    pub fn from_query(search: &str) -> Self {
        let query = parse_host_query(search);
        Self {
            account: non_blank(query.account),
            seller_name: non_blank(query.seller_name),
            ..Self::default()
        }
    }

    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let config = Self::from_query(&search);
        log::debug!("config: {:?}", config);
        config
    }

    /// Host query for the applied filters. The host context is kept so a reload
    /// restores the same scope; a selected seller replaces the host seller.
    pub fn host_query(&self, criteria: &FilterCriteria) -> Result<String, String> {
        let mut params = criteria.host_params();
        if let Some(account) = &self.account {
            params.insert("account".to_string(), account.clone());
        }
        if let Some(seller_name) = &self.seller_name {
            params
                .entry("sellerName".to_string())
                .and_modify(|v| {
                    if v.is_empty() {
                        *v = seller_name.clone();
                    }
                })
                .or_insert_with(|| seller_name.clone());
        }
        encode_host_params(params)
    }

    /// Mirror the applied filters into the address bar without a reload
    pub fn write_host_query(&self, criteria: &FilterCriteria) {
        let query = match self.host_query(criteria) {
            Ok(query) => query,
            Err(e) => {
                log::warn!("config: {}", e);
                return;
            }
        };
        let new_url = format!("?{}", query);

        let Some(window) = web_sys::window() else {
            return;
        };
        let current = window.location().search().unwrap_or_default();
        if current == new_url {
            return;
        }
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }

    pub fn scope(&self) -> ListScope {
        ListScope {
            account: self.account.clone(),
            host_seller_name: self.seller_name.clone(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Unparseable query strings fall back to no host context
pub fn parse_host_query(search: &str) -> HostQuery {
    let raw = search.trim_start_matches('?');
    if raw.is_empty() {
        return HostQuery::default();
    }
    match serde_qs::from_str::<HostQuery>(raw) {
        Ok(query) => query,
        Err(e) => {
            log::warn!("config: ignoring malformed host query '{}': {}", raw, e);
            HostQuery::default()
        }
    }
}
