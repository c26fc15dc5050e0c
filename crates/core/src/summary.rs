//! Human-readable booking and payment summaries.
//!
//! Both summaries are pure derivations of the current [`BookingDraft`]; they
//! hold display text only and are rebuilt on every arrival at the step that
//! shows them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::WizardConfig;
use crate::draft::{event_time_text, event_type_text, BookingDraft};

/// Date format of the `event-date` input.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Long form used on the review step, e.g. `Wednesday, January 1, 2025`.
pub const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Shown in place of a date that cannot be parsed.
pub const INVALID_DATE_TEXT: &str = "Invalid Date";

/// Format a `YYYY-MM-DD` input value in long form.
pub fn format_long_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT) {
        Ok(date) => date.format(LONG_DATE_FORMAT).to_string(),
        Err(_) => INVALID_DATE_TEXT.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Review summary
// ---------------------------------------------------------------------------

/// Everything shown on the final review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    /// `"Basic - $499"`, or empty when no package is selected.
    pub package: String,
    pub price: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    /// Option text of the selected event type.
    pub event_type: String,
    /// Long-form event date.
    pub event_date: String,
    /// Option text of the selected event time.
    pub event_time: String,
    pub event_location: String,
    pub event_notes: String,
    /// Payment method label; only present in the payment flow.
    pub payment_method: Option<String>,
}

impl BookingSummary {
    pub fn build(draft: &BookingDraft, config: &WizardConfig) -> Self {
        let (package, price) = match draft.selected_package {
            Some(p) => (p.display_line(), p.price().to_string()),
            None => (String::new(), String::new()),
        };

        Self {
            package,
            price,
            client_name: draft.client_name.clone(),
            client_email: draft.client_email.clone(),
            client_phone: draft.client_phone.clone(),
            event_type: event_type_text(&draft.event_type).to_string(),
            event_date: format_long_date(&draft.event_date),
            event_time: event_time_text(&draft.event_time).to_string(),
            event_location: draft.event_location.clone(),
            event_notes: draft.event_notes.clone(),
            payment_method: config
                .payment_step
                .then(|| draft.effective_payment_method().label().to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Payment summary
// ---------------------------------------------------------------------------

/// Amount due and method shown on the payment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub package: String,
    pub total: String,
    pub method: String,
}

impl PaymentSummary {
    pub fn build(draft: &BookingDraft) -> Self {
        let (package, total) = match draft.selected_package {
            Some(p) => (p.display_line(), p.price().to_string()),
            None => (String::new(), String::new()),
        };
        Self {
            package,
            total,
            method: draft.effective_payment_method().label().to_string(),
        }
    }
}
