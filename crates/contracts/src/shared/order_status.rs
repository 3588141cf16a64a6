//! Order status vocabulary and its display styling
//!
//! The table is process-wide immutable configuration: built once on first
//! access and never mutated afterwards.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Status token that unlocks the invoice creation action
pub const INVOICED: &str = "invoiced";

/// Пара цветов для отображения статуса (фон + текст)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStyle {
    pub bg_color: String,
    pub font_color: String,
}

impl StatusStyle {
    fn new(bg_color: &str, font_color: &str) -> Self {
        Self {
            bg_color: bg_color.to_string(),
            font_color: font_color.to_string(),
        }
    }

    /// Blank styling, returned for tokens missing from the table
    pub fn blank() -> Self {
        Self::default()
    }
}

/// Status token -> styling, in display order
pub struct StatusStyleTable {
    entries: Vec<(&'static str, StatusStyle)>,
}

impl StatusStyleTable {
    fn build() -> Self {
        let entries = vec![
            ("order-created", StatusStyle::new("#e3e4e6", "#585959")),
            ("payment-pending", StatusStyle::new("#fff6e0", "#ffb100")),
            ("payment-approved", StatusStyle::new("#eafce3", "#79b03a")),
            ("waiting-for-seller-decision", StatusStyle::new("#fff6e0", "#ffb100")),
            ("ready-for-handling", StatusStyle::new("#dbe9fd", "#2953b2")),
            ("handling", StatusStyle::new("#dbe9fd", "#2953b2")),
            ("window-to-cancel", StatusStyle::new("#fff6e0", "#ffb100")),
            ("invoiced", StatusStyle::new("#eafce3", "#79b03a")),
            ("request-cancel", StatusStyle::new("#ffebeb", "#d42f1c")),
            ("canceled", StatusStyle::new("#ffebeb", "#d42f1c")),
        ];
        Self { entries }
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, token: &str) -> Option<&StatusStyle> {
        self.entries
            .iter()
            .find(|(key, _)| *key == token)
            .map(|(_, style)| style)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

pub static STATUS_STYLES: Lazy<StatusStyleTable> = Lazy::new(StatusStyleTable::build);

/// Resolve a status token to its styling. Unknown tokens get blank styling.
pub fn classify(token: &str) -> StatusStyle {
    STATUS_STYLES.get(token).cloned().unwrap_or_else(StatusStyle::blank)
}

/// Option of the status filter select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOption {
    pub value: String,
    pub label: String,
}

/// Status filter options, one per known token, in table order
pub fn status_options() -> Vec<StatusOption> {
    STATUS_STYLES
        .tokens()
        .map(|token| StatusOption {
            value: token.to_string(),
            label: token.to_string(),
        })
        .collect()
}

/// The invoice action is offered only while the list is filtered to invoiced orders
pub fn invoice_action_available(status: &str) -> bool {
    status == INVOICED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_token() {
        let style = classify("invoiced");
        assert_eq!(style.bg_color, "#eafce3");
        assert_eq!(style.font_color, "#79b03a");
    }

    #[test]
    fn test_classify_unknown_token_is_blank() {
        assert_eq!(classify("teleported"), StatusStyle::blank());
        assert_eq!(classify(""), StatusStyle::blank());
        let style = classify("unknown");
        assert_eq!(style.bg_color, "");
        assert_eq!(style.font_color, "");
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify("Invoiced"), StatusStyle::blank());
        assert_eq!(classify(" invoiced"), StatusStyle::blank());
    }

    #[test]
    fn test_status_options_follow_table_order() {
        let options = status_options();
        assert_eq!(options.len(), STATUS_STYLES.tokens().count());
        assert_eq!(options[0].value, "order-created");
        assert!(options.iter().any(|o| o.value == INVOICED && o.label == INVOICED));
    }

    #[test]
    fn test_invoice_action_only_for_invoiced() {
        assert!(invoice_action_available("invoiced"));
        assert!(!invoice_action_available(""));
        assert!(!invoice_action_available("canceled"));
    }

    #[test]
    fn test_style_serializes_camel_case() {
        let json = serde_json::to_value(classify("canceled")).unwrap();
        assert_eq!(json["bgColor"], "#ffebeb");
        assert_eq!(json["fontColor"], "#d42f1c");
    }
}
