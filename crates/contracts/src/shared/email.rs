//! Client-side email address validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// local-part "@" domain, domain with at least one dot and a TLD of 2+ chars.
/// The local part is either dot-separated atoms or a quoted string.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\].,;:\s@"]+(\.[^<>()\[\].,;:\s@"]+)*)|(".+"))@(([^<>()\[\].,;:\s@"]+\.)+[^<>()\[\].,;:\s@"]{2,})$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Результат проверки email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidation {
    pub empty: bool,
    pub valid_format: bool,
}

impl EmailValidation {
    /// State of a freshly opened form: nothing typed, no format complaint
    pub const fn initial() -> Self {
        Self {
            empty: true,
            valid_format: true,
        }
    }

    pub const fn is_acceptable(&self) -> bool {
        !self.empty && self.valid_format
    }
}

impl Default for EmailValidation {
    fn default() -> Self {
        Self::initial()
    }
}

/// Emptiness is checked first; an empty value is never also reported as malformed.
pub fn validate(value: &str) -> EmailValidation {
    if value.is_empty() {
        return EmailValidation::initial();
    }

    EmailValidation {
        empty: false,
        valid_format: EMAIL_PATTERN.is_match(value),
    }
}
