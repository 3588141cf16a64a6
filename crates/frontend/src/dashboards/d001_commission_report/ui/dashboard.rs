use contracts::domain::a001_seller_orders::OrderRow;
use contracts::domain::a002_seller_invoices::InvoiceRow;
use contracts::domain::a003_sellers::{BillingSettings, SellerOption};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::settings_summary::SettingsSummary;
use crate::domain::a001_seller_orders::ui::list::{run_orders_command, SellerOrdersList};
use crate::domain::a002_seller_invoices::confirm_gate::{invoice_action_shown, SellerContext};
use crate::domain::a002_seller_invoices::ui::confirm_invoice::ConfirmInvoice;
use crate::domain::a002_seller_invoices::ui::list::{run_invoices_command, SellerInvoicesList};
use crate::domain::a003_sellers::api::{fetch_billing_settings, fetch_seller_options};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_state::{FilterAction, FilterCriteria, ListSync, SyncCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportTab {
    Orders,
    Invoices,
}

/// Отчет по комиссиям: заказы и счета продавца за период.
///
/// Both lists receive every filter action and keep their own window.
#[component]
pub fn CommissionReportDashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let scope = config.scope();
    let account_bound = scope.is_account_bound();
    let page_size_options = config.page_size_options.clone();
    let config = StoredValue::new(config);

    let filter = FilterCriteria::today();
    let orders = RwSignal::new(ListSync::<OrderRow>::new(filter.clone(), scope.clone()));
    let invoices = RwSignal::new(ListSync::<InvoiceRow>::new(filter, scope));

    let seller_options = RwSignal::new(Vec::<SellerOption>::new());
    let settings = RwSignal::new(None::<BillingSettings>);
    let active_tab = RwSignal::new(ReportTab::Orders);

    // Первая загрузка списков и справочников
    Effect::new(move |_| {
        let mut command = SyncCommand::Cleared;
        orders.update(|s| command = s.refresh());
        run_orders_command(orders, command);
        let mut command = SyncCommand::Cleared;
        invoices.update(|s| command = s.refresh());
        run_invoices_command(invoices, command);

        if !account_bound {
            spawn_local(async move {
                match fetch_seller_options().await {
                    Ok(options) => seller_options.set(options),
                    Err(e) => log::warn!("Failed to load sellers: {}", e),
                }
            });
        }
        spawn_local(async move {
            match fetch_billing_settings().await {
                Ok(loaded) => settings.set(loaded),
                Err(e) => log::warn!("Failed to load billing settings: {}", e),
            }
        });
    });

    let on_filter = Callback::new(move |action: FilterAction| {
        let mut command = SyncCommand::Cleared;
        orders.update(|s| command = s.on_filter(action.clone()));
        run_orders_command(orders, command);
        let mut command = SyncCommand::Cleared;
        invoices.update(|s| command = s.on_filter(action));
        run_invoices_command(invoices, command);
        orders.with_untracked(|s| config.with_value(|c| c.write_host_query(&s.filter)));
    });

    let criteria = Signal::derive(move || orders.with(|s| s.filter.clone()));
    let show_invoice_action = move || orders.with(invoice_action_shown);
    let seller_context = Signal::derive(move || orders.with(SellerContext::from_list));

    let tab_class = move |tab: ReportTab| {
        if active_tab.get() == tab {
            "report-tabs__tab report-tabs__tab--active"
        } else {
            "report-tabs__tab"
        }
    };

    let orders_page_sizes = page_size_options.clone();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("invoices")}
                    <h1 class="page__title">"Commission report"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=show_invoice_action>
                        <ConfirmInvoice seller=seller_context />
                    </Show>
                </div>
            </div>

            <SettingsSummary settings=settings />

            <FilterPanel
                criteria=criteria
                seller_options=seller_options
                disable_seller_select=account_bound
                on_action=on_filter
            />

            <div class="report-tabs">
                <button class=move || tab_class(ReportTab::Orders) on:click=move |_| active_tab.set(ReportTab::Orders)>
                    "Orders"
                </button>
                <button class=move || tab_class(ReportTab::Invoices) on:click=move |_| active_tab.set(ReportTab::Invoices)>
                    "Invoices"
                </button>
            </div>

            <div class="page__content">
                <Show
                    when=move || active_tab.get() == ReportTab::Orders
                    fallback=move || view! {
                        <SellerInvoicesList sync=invoices page_size_options=page_size_options.clone() />
                    }
                >
                    <SellerOrdersList sync=orders page_size_options=orders_page_sizes.clone() />
                </Show>
            </div>
        </div>
    }
}
