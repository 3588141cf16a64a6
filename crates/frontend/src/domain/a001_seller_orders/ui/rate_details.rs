use contracts::domain::a001_seller_orders::RateItem;
use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::Modal;

/// Комиссии по позициям заказа
#[component]
pub fn RateDetails(items: Vec<RateItem>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Commission rates" on_close=on_close>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Item ID"</TableHeaderCell>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Product commission %"</TableHeaderCell>
                        <TableHeaderCell>"Freight commission %"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {items.into_iter().map(|item| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{item.item_id}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout truncate=true>{item.name_item}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{item.rate.product_commission_percentage.to_string()}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{item.rate.freight_commission_percentage.to_string()}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
        </Modal>
    }
}
