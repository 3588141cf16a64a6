use contracts::domain::a001_seller_orders::{
    OrderRow, OrdersData, OrdersVariables, QueryVariables, ORDERS_QUERY,
};

use crate::shared::api_utils::post_graphql;
use crate::shared::list_state::ListPage;

/// Получить страницу заказов продавца
pub async fn fetch_orders(
    variables: QueryVariables,
    account_bound: bool,
) -> Result<ListPage<OrderRow>, String> {
    let data: OrdersData = post_graphql(
        ORDERS_QUERY,
        OrdersVariables {
            search_orders_params: variables,
        },
    )
    .await?;

    Ok(data.into_rows(account_bound).into())
}
