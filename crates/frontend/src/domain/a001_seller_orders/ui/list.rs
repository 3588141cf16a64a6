use contracts::domain::a001_seller_orders::{OrderRow, RateItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::rate_details::RateDetails;
use crate::domain::a001_seller_orders::api::fetch_orders;
use crate::shared::components::empty_table::EmptyTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_tag::StatusTag;
use crate::shared::icons::icon;
use crate::shared::list_state::{ListSync, PaginationAction, SyncCommand};

const ORDER_LINK_BASE: &str = "/admin/checkout/#/orders";

pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Выполнить команду синхронизации списка заказов
pub fn run_orders_command(sync: RwSignal<ListSync<OrderRow>>, command: SyncCommand) {
    let SyncCommand::Fetch(request) = command else {
        return;
    };
    let account_bound = sync.with_untracked(|s| s.scope().is_account_bound());
    spawn_local(async move {
        let result = fetch_orders(request.variables, account_bound).await;
        sync.update(|s| {
            s.on_response(request.generation, result);
        });
    });
}

#[component]
pub fn SellerOrdersList(
    sync: RwSignal<ListSync<OrderRow>>,
    page_size_options: Vec<u32>,
) -> impl IntoView {
    let rate_items = RwSignal::new(None::<Vec<RateItem>>);

    let on_page = Callback::new(move |action: PaginationAction| {
        let mut command = None;
        sync.update(|s| command = s.on_page(action));
        if let Some(command) = command {
            run_orders_command(sync, command);
        }
    });

    let window = Signal::derive(move || sync.with(|s| s.window));
    let loading = Signal::derive(move || sync.with(|s| s.loading));
    let error = Signal::derive(move || sync.with(|s| s.last_error.clone()));
    let has_rows = move || sync.with(|s| !s.rows.is_empty());

    view! {
        <div class="seller-orders">
            <div class="list-toolbar">
                <PaginationControls
                    window=window
                    on_action=on_page
                    page_size_options=page_size_options
                />
                <Show when=move || loading.get()>
                    <Spinner />
                </Show>
            </div>

            <Show when=has_rows fallback=move || view! { <EmptyTable error=error /> }>
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order ID"</TableHeaderCell>
                                <TableHeaderCell>"Creation date"</TableHeaderCell>
                                <TableHeaderCell>"Total order"</TableHeaderCell>
                                <TableHeaderCell>"Total commission"</TableHeaderCell>
                                <TableHeaderCell>"Rate"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || sync.with(|s| s.rows.clone())
                                key=|row| row.order_id.clone()
                                children=move |row| {
                                    let href = format!("{}/{}", ORDER_LINK_BASE, row.id);
                                    let rate = row.rate.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a href=href class="table__link" target="_blank">{row.id.clone()}</a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.creation_date.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_money(row.total_order)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_money(row.total_commission)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="button button--icon"
                                                        title="Commission rates"
                                                        on:click=move |_| rate_items.set(Some(rate.clone()))
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusTag status=row.status.clone() />
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </Show>

            {move || rate_items.get().map(|items| view! {
                <RateDetails items=items on_close=Callback::new(move |_| rate_items.set(None)) />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1234.50");
        assert_eq!(format_money(0.0), "$0.00");
    }
}
