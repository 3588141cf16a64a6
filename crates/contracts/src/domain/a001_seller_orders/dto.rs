use serde::{Deserialize, Serialize};

use crate::shared::dates::date_only;
use crate::shared::order_status::classify;

pub const ORDERS_QUERY: &str = r#"
query Orders($searchOrdersParams: SearchOrdersParams) {
  orders(searchOrdersParams: $searchOrdersParams) {
    data {
      orderId
      sellerOrderId
      creationDate
      totalOrderValue
      totalComission
      status
      rate {
        itemId
        nameItem
        rate { freightCommissionPercentage productCommissionPercentage }
      }
    }
    paging { total }
  }
}
"#;

/// Параметры запроса списка заказов (фильтры + пагинация)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariables {
    pub date_start: String,
    pub date_end: String,
    pub seller_name: String,
    pub page: u32,
    pub perpage: u32,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersVariables {
    pub search_orders_params: QueryVariables,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersData {
    pub orders: OrdersPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersPage {
    #[serde(default)]
    pub data: Vec<RawOrder>,
    pub paging: Paging,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Paging {
    pub total: u64,
}

/// Order as returned by the orders query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub seller_order_id: Option<String>,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub total_order_value: f64,
    /// Field name is misspelled on the server side
    #[serde(default)]
    pub total_comission: f64,
    #[serde(default)]
    pub rate: Vec<RateItem>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateItem {
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub name_item: String,
    #[serde(default)]
    pub rate: CommissionRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRate {
    pub freight_commission_percentage: f64,
    pub product_commission_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDisplay {
    pub label: String,
    pub bg_color: String,
    pub font_color: String,
}

impl StatusDisplay {
    pub fn from_token(token: &str) -> Self {
        let style = classify(token);
        Self {
            label: token.to_string(),
            bg_color: style.bg_color,
            font_color: style.font_color,
        }
    }
}

/// Строка таблицы заказов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    /// Marketplace order id; unique even when `id` is blank
    pub order_id: String,
    pub creation_date: String,
    pub total_order: f64,
    pub total_commission: f64,
    pub rate: Vec<RateItem>,
    pub status: StatusDisplay,
}

impl OrderRow {
    /// Account-bound views identify orders by the seller-side order id
    pub fn from_raw(raw: RawOrder, account_bound: bool) -> Self {
        let id = if account_bound {
            raw.seller_order_id.unwrap_or_default()
        } else {
            raw.order_id.clone()
        };

        Self {
            id,
            order_id: raw.order_id,
            creation_date: date_only(&raw.creation_date).to_string(),
            total_order: raw.total_order_value,
            total_commission: raw.total_comission,
            rate: raw.rate,
            status: StatusDisplay::from_token(&raw.status),
        }
    }
}

impl OrdersData {
    /// Rows in response order plus the paging total
    pub fn into_rows(self, account_bound: bool) -> (Vec<OrderRow>, u64) {
        let total = self.orders.paging.total;
        let rows = self
            .orders
            .data
            .into_iter()
            .map(|raw| OrderRow::from_raw(raw, account_bound))
            .collect();
        (rows, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> OrdersData {
        serde_json::from_value(json!({
            "orders": {
                "data": [
                    {
                        "orderId": "1300001-01",
                        "sellerOrderId": "SLR-1300001-01",
                        "creationDate": "2024-03-10T12:30:00.000Z",
                        "totalOrderValue": 150.5,
                        "totalComission": 15.05,
                        "status": "invoiced",
                        "rate": [
                            {
                                "itemId": "42",
                                "nameItem": "Shoes",
                                "rate": {
                                    "freightCommissionPercentage": 5.0,
                                    "productCommissionPercentage": 10.0
                                }
                            }
                        ]
                    },
                    {
                        "orderId": "1300002-01",
                        "creationDate": "2024-03-11",
                        "totalOrderValue": 20,
                        "totalComission": 2,
                        "status": "something-new",
                        "rate": []
                    }
                ],
                "paging": { "total": 57 }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_query_variables_wire_names() {
        let vars = OrdersVariables {
            search_orders_params: QueryVariables {
                date_start: "2024-03-01".into(),
                date_end: "2024-03-14".into(),
                seller_name: "Seller 1".into(),
                page: 2,
                perpage: 20,
                status: String::new(),
            },
        };
        assert_eq!(
            serde_json::to_value(vars).unwrap(),
            json!({
                "searchOrdersParams": {
                    "dateStart": "2024-03-01",
                    "dateEnd": "2024-03-14",
                    "sellerName": "Seller 1",
                    "page": 2,
                    "perpage": 20,
                    "status": ""
                }
            })
        );
    }

    #[test]
    fn test_into_rows_reshapes_records() {
        let (rows, total) = sample().into_rows(false);
        assert_eq!(total, 57);
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.id, "1300001-01");
        assert_eq!(first.creation_date, "2024-03-10");
        assert_eq!(first.total_order, 150.5);
        assert_eq!(first.total_commission, 15.05);
        assert_eq!(first.status.label, "invoiced");
        assert_eq!(first.status.bg_color, "#eafce3");
        assert_eq!(first.rate[0].rate.product_commission_percentage, 10.0);

        let second = &rows[1];
        assert_eq!(second.creation_date, "2024-03-11");
        assert_eq!(second.status.label, "something-new");
        assert_eq!(second.status.bg_color, "");
        assert_eq!(second.status.font_color, "");
    }

    #[test]
    fn test_account_bound_uses_seller_order_id() {
        let (rows, _) = sample().into_rows(true);
        assert_eq!(rows[0].id, "SLR-1300001-01");
        assert_eq!(rows[1].id, "");
        assert_eq!(rows[0].order_id, "1300001-01");
        assert_eq!(rows[1].order_id, "1300002-01");
    }
}
