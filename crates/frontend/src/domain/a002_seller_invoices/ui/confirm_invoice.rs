use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_seller_invoices::api::create_invoice;
use crate::domain::a002_seller_invoices::confirm_gate::{ConfirmationGate, GateState, SellerContext};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Кнопка "Create invoice" с диалогом подтверждения по email.
///
/// The dialog reads the seller and period at confirm time, so it follows filter changes.
#[component]
pub fn ConfirmInvoice(#[prop(into)] seller: Signal<SellerContext>) -> impl IntoView {
    let gate = RwSignal::new(ConfirmationGate::new(seller.get_untracked()));

    Effect::new(move |_| {
        let current = seller.get();
        gate.update(|g| g.set_seller(current));
    });

    let state = Signal::derive(move || gate.with(|g| g.state().clone()));

    let on_open = move |_| {
        gate.update(|g| {
            g.open();
        });
    };
    let on_cancel = Callback::new(move |_| gate.update(|g| g.cancel()));

    let on_confirm = move |_| {
        let mut data = None;
        gate.update(|g| data = g.confirm());
        let Some(data) = data else {
            return;
        };
        spawn_local(async move {
            let result = create_invoice(data).await;
            gate.update(|g| g.on_result(result));
        });
    };

    view! {
        <div class="confirm-invoice">
            {move || match state.get() {
                GateState::Success => view! {
                    <div class="alert alert--success">"Invoice created"</div>
                }.into_any(),
                GateState::Submitting => view! {
                    <Flex align=FlexAlign::Center gap=FlexGap::Small>
                        <Spinner />
                        <span>"Creating invoice..."</span>
                    </Flex>
                }.into_any(),
                GateState::Error(e) => view! {
                    <div class="alert alert--error">{format!("Invoice was not created: {}", e)}</div>
                    <Button appearance=ButtonAppearance::Primary on_click=on_open>
                        {icon("plus")}
                        " Create invoice"
                    </Button>
                }.into_any(),
                GateState::Closed | GateState::Open => view! {
                    <Button appearance=ButtonAppearance::Primary on_click=on_open>
                        {icon("plus")}
                        " Create invoice"
                    </Button>
                }.into_any(),
            }}

            <Show when=move || gate.with(|g| g.is_open())>
                <Modal title="Create invoice" on_close=on_cancel>
                    <p>{move || format!("Seller: {}", seller.get().name)}</p>
                    <p>
                        {move || {
                            let s = seller.get();
                            format!("Period: {} - {}", s.start_date, s.end_date)
                        }}
                    </p>
                    <div class="form-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || gate.with(|g| g.email().to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                gate.update(|g| g.input_email(&value));
                            }
                        />
                        {move || gate.with(|g| g.error_message()).map(|msg| view! {
                            <div class="form-group__error">{msg}</div>
                        })}
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_confirm
                            disabled=Signal::derive(move || !gate.with(|g| g.can_confirm()))
                        >
                            "Confirm"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                            "Cancel"
                        </Button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
