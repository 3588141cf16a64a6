use serde::{Deserialize, Serialize};

use crate::domain::a001_seller_orders::QueryVariables;

pub const INVOICES_QUERY: &str = r#"
query InvoicesBySeller($sellerInvoiceParams: SellerInvoiceParams) {
  invoicesBySeller(sellerInvoiceParams: $sellerInvoiceParams) {
    data { id invoiceCreatedDate status }
    pagination { total }
  }
}
"#;

pub const CREATE_INVOICE_MUTATION: &str = r#"
mutation CreateInvoice($invoiceData: InvoiceData) {
  createInvoice(invoiceData: $invoiceData)
}
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDates {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePagination {
    pub page: u32,
    pub page_size: u32,
}

/// Параметры запроса счетов продавца
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInvoiceParams {
    pub seller_name: String,
    pub dates: InvoiceDates,
    pub pagination: InvoicePagination,
}

impl From<&QueryVariables> for SellerInvoiceParams {
    fn from(vars: &QueryVariables) -> Self {
        Self {
            seller_name: vars.seller_name.clone(),
            dates: InvoiceDates {
                start_date: vars.date_start.clone(),
                end_date: vars.date_end.clone(),
            },
            pagination: InvoicePagination {
                page: vars.page,
                page_size: vars.perpage,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicesVariables {
    pub seller_invoice_params: SellerInvoiceParams,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicesData {
    pub invoices_by_seller: InvoicesPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoicesPage {
    #[serde(default)]
    pub data: Vec<InvoiceRow>,
    pub pagination: InvoiceTotal,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InvoiceTotal {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub id: String,
    #[serde(default)]
    pub invoice_created_date: String,
    #[serde(default)]
    pub status: String,
}

impl InvoicesData {
    pub fn into_rows(self) -> (Vec<InvoiceRow>, u64) {
        let page = self.invoices_by_seller;
        (page.data, page.pagination.total)
    }
}

/// Данные для создания счета
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub name: String,
    pub id: String,
    pub email: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceVariables {
    pub invoice_data: InvoiceData,
}

/// Only success/failure of the mutation matters; the payload is not inspected
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceData {
    #[serde(default)]
    pub create_invoice: serde_json::Value,
}
