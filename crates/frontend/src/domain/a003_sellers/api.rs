use contracts::domain::a003_sellers::{
    BillingSettings, SellerOption, SellersData, SettingsData, SELLERS_QUERY, SETTINGS_QUERY,
};

use crate::shared::api_utils::post_graphql;

/// Список продавцов для фильтра
pub async fn fetch_seller_options() -> Result<Vec<SellerOption>, String> {
    let data: SellersData = post_graphql(SELLERS_QUERY, serde_json::json!({})).await?;
    Ok(data.into_options())
}

pub async fn fetch_billing_settings() -> Result<Option<BillingSettings>, String> {
    let data: SettingsData = post_graphql(SETTINGS_QUERY, serde_json::json!({})).await?;
    Ok(data.get_settings)
}
