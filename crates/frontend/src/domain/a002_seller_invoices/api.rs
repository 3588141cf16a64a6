use contracts::domain::a001_seller_orders::QueryVariables;
use contracts::domain::a002_seller_invoices::{
    CreateInvoiceData, CreateInvoiceVariables, InvoiceData, InvoiceRow, InvoicesData,
    InvoicesVariables, SellerInvoiceParams, CREATE_INVOICE_MUTATION, INVOICES_QUERY,
};

use crate::shared::api_utils::post_graphql;
use crate::shared::list_state::ListPage;

/// Получить страницу счетов продавца
pub async fn fetch_invoices(variables: &QueryVariables) -> Result<ListPage<InvoiceRow>, String> {
    let data: InvoicesData = post_graphql(
        INVOICES_QUERY,
        InvoicesVariables {
            seller_invoice_params: SellerInvoiceParams::from(variables),
        },
    )
    .await?;

    Ok(data.into_rows().into())
}

/// Создать счет. Only success or failure is reported.
pub async fn create_invoice(invoice_data: InvoiceData) -> Result<(), String> {
    let _: CreateInvoiceData = post_graphql(
        CREATE_INVOICE_MUTATION,
        CreateInvoiceVariables { invoice_data },
    )
    .await?;
    Ok(())
}
