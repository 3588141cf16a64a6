use contracts::domain::a002_seller_invoices::InvoiceData;
use contracts::shared::email::{validate, EmailValidation};
use contracts::shared::order_status::invoice_action_available;

use crate::shared::list_state::ListSync;

/// Seller and period the invoice is created for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerContext {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

impl SellerContext {
    /// Seller and period currently queried by a list.
    /// Without a selected seller the queried name doubles as the id.
    pub fn from_list<Row>(sync: &ListSync<Row>) -> Self {
        let vars = sync.variables();
        let id = match (&sync.scope().account, sync.filter.seller_selection.first()) {
            (None, Some(seller)) => seller.id.clone(),
            _ => vars.seller_name.clone(),
        };
        Self {
            id,
            name: vars.seller_name,
            start_date: vars.date_start,
            end_date: vars.date_end,
        }
    }

    /// An invoice needs a seller; without one there is nothing to bill
    pub fn has_seller(&self) -> bool {
        !self.name.is_empty()
    }
}

/// The "Create invoice" action is offered for invoiced orders of a seller in scope
pub fn invoice_action_shown<Row>(sync: &ListSync<Row>) -> bool {
    invoice_action_available(&sync.filter.status) && SellerContext::from_list(sync).has_seller()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Closed,
    Open,
    Submitting,
    Success,
    Error(String),
}

/// Подтверждение создания счета: email -> подтверждение -> мутация.
///
/// Closed -> Open -> Submitting -> Success | Error. Cancel returns Open -> Closed.
/// Reopening after Error starts over with an empty email.
#[derive(Debug, Clone)]
pub struct ConfirmationGate {
    state: GateState,
    email: String,
    validation: EmailValidation,
    seller: SellerContext,
}

impl ConfirmationGate {
    pub fn new(seller: SellerContext) -> Self {
        Self {
            state: GateState::Closed,
            email: String::new(),
            validation: EmailValidation::initial(),
            seller,
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn validation(&self) -> EmailValidation {
        self.validation
    }

    pub fn is_open(&self) -> bool {
        self.state == GateState::Open
    }

    /// Filters changed while the dialog is closed
    pub fn set_seller(&mut self, seller: SellerContext) {
        self.seller = seller;
    }

    /// Allowed from Closed and Error; Success is final for this gate
    pub fn open(&mut self) -> bool {
        match self.state {
            GateState::Closed | GateState::Error(_) => {
                self.email.clear();
                self.validation = EmailValidation::initial();
                self.state = GateState::Open;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if self.state == GateState::Open {
            self.state = GateState::Closed;
        }
    }

    /// Every keystroke re-validates; ignored outside Open
    pub fn input_email(&mut self, value: &str) {
        if self.state != GateState::Open {
            return;
        }
        self.email = value.to_string();
        self.validation = validate(value);
    }

    pub fn can_confirm(&self) -> bool {
        self.state == GateState::Open && self.validation.is_acceptable() && self.seller.has_seller()
    }

    /// Mutation input for the first confirm; `None` while disabled, already submitting
    /// or without a seller
    pub fn confirm(&mut self) -> Option<InvoiceData> {
        if !self.can_confirm() {
            return None;
        }
        self.state = GateState::Submitting;
        Some(InvoiceData {
            name: self.seller.name.clone(),
            id: self.seller.id.clone(),
            email: self.email.clone(),
            start_date: self.seller.start_date.clone(),
            end_date: self.seller.end_date.clone(),
        })
    }

    pub fn on_result(&mut self, result: Result<(), String>) {
        if self.state != GateState::Submitting {
            return;
        }
        self.state = match result {
            Ok(()) => {
                log::info!("invoice created for seller '{}'", self.seller.name);
                GateState::Success
            }
            Err(e) => {
                log::warn!("invoice creation failed: {}", e);
                GateState::Error(e)
            }
        };
    }

    pub fn error_message(&self) -> Option<&'static str> {
        if self.validation.empty {
            return Some("Specify an email address");
        }
        if !self.validation.valid_format {
            return Some("Invalid email address");
        }
        None
    }
}
