use serde::{Deserialize, Deserializer, Serialize};

pub const SELLERS_QUERY: &str = r#"
query GetSellers {
  getSellers {
    sellers { id name }
  }
}
"#;

pub const SETTINGS_QUERY: &str = r#"
query GetSettings {
  getSettings { billingCycle startDate endDate integration }
}
"#;

/// Продавец: пара id + имя
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SellerRef {
    pub id: String,
    pub name: String,
}

impl SellerRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Option of the seller filter select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerOption {
    pub value: SellerRef,
    pub label: String,
}

impl From<SellerRef> for SellerOption {
    fn from(seller: SellerRef) -> Self {
        let label = seller.name.clone();
        Self {
            value: seller,
            label,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellersData {
    pub get_sellers: SellersPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SellersPage {
    #[serde(default)]
    pub sellers: Vec<SellerRef>,
}

impl SellersData {
    pub fn into_options(self) -> Vec<SellerOption> {
        self.get_sellers
            .sellers
            .into_iter()
            .map(SellerOption::from)
            .collect()
    }
}

/// Stored billing configuration (read-only for the report)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSettings {
    #[serde(default)]
    pub billing_cycle: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Stored either as a string, a number or a boolean depending on the writer
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub integration: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsData {
    pub get_settings: Option<BillingSettings>,
}

fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
