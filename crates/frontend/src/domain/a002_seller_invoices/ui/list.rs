use contracts::domain::a001_seller_orders::StatusDisplay;
use contracts::domain::a002_seller_invoices::InvoiceRow;
use contracts::shared::dates::date_only;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_seller_invoices::api::fetch_invoices;
use crate::shared::components::empty_table::EmptyTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_tag::StatusTag;
use crate::shared::list_state::{ListSync, PaginationAction, SyncCommand};

/// Выполнить команду синхронизации списка счетов
pub fn run_invoices_command(sync: RwSignal<ListSync<InvoiceRow>>, command: SyncCommand) {
    let SyncCommand::Fetch(request) = command else {
        return;
    };
    spawn_local(async move {
        let result = fetch_invoices(&request.variables).await;
        sync.update(|s| {
            s.on_response(request.generation, result);
        });
    });
}

#[component]
pub fn SellerInvoicesList(
    sync: RwSignal<ListSync<InvoiceRow>>,
    page_size_options: Vec<u32>,
) -> impl IntoView {
    let on_page = Callback::new(move |action: PaginationAction| {
        let mut command = None;
        sync.update(|s| command = s.on_page(action));
        if let Some(command) = command {
            run_invoices_command(sync, command);
        }
    });

    let window = Signal::derive(move || sync.with(|s| s.window));
    let loading = Signal::derive(move || sync.with(|s| s.loading));
    let error = Signal::derive(move || sync.with(|s| s.last_error.clone()));

    view! {
        <div class="seller-invoices">
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

            <Show
                when=move || sync.with(|s| !s.rows.is_empty())
                fallback=move || view! { <EmptyTable error=error /> }
            >
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Invoice ID"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || sync.with(|s| s.rows.clone())
                                key=|row| row.id.clone()
                                children=move |row| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{row.id.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{date_only(&row.invoice_created_date).to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusTag status=StatusDisplay::from_token(&row.status) />
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </Show>
        </div>
    }
}
