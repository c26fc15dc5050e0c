//! In-progress booking state for the active session.
//!
//! [`BookingDraft`] is the form surface the wizard reads from. It is never
//! persisted; a successful submit snapshots it into a
//! [`BookingRecord`](crate::records::BookingRecord) and clears it.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::package::{Package, DEFAULT_PACKAGE};
use crate::payment::{PaymentMethod, DEFAULT_PAYMENT_METHOD};
use crate::summary::INPUT_DATE_FORMAT;

// ---------------------------------------------------------------------------
// Form fields
// ---------------------------------------------------------------------------

/// Named text fields on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ClientName,
    ClientEmail,
    ClientPhone,
    EventType,
    EventDate,
    EventTime,
    EventLocation,
    EventNotes,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        Self::ClientName,
        Self::ClientEmail,
        Self::ClientPhone,
        Self::EventType,
        Self::EventDate,
        Self::EventTime,
        Self::EventLocation,
        Self::EventNotes,
    ];

    /// Parse the element name used on the form, e.g. `"client-email"`.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| CoreError::UnknownField(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ClientName => "client-name",
            Self::ClientEmail => "client-email",
            Self::ClientPhone => "client-phone",
            Self::EventType => "event-type",
            Self::EventDate => "event-date",
            Self::EventTime => "event-time",
            Self::EventLocation => "event-location",
            Self::EventNotes => "event-notes",
        }
    }
}

// ---------------------------------------------------------------------------
// Select option text
// ---------------------------------------------------------------------------

const EVENT_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("wedding", "Wedding Photography"),
    ("prewedding", "Pre-Wedding Session"),
    ("engagement", "Engagement Session"),
    ("corporate", "Corporate Event"),
    ("birthday", "Birthday Party"),
    ("product", "Product Shoot"),
    ("other", "Other"),
];

const EVENT_TIME_OPTIONS: &[(&str, &str)] = &[
    ("morning", "Morning (8:00 AM - 12:00 PM)"),
    ("afternoon", "Afternoon (12:00 PM - 4:00 PM)"),
    ("evening", "Evening (4:00 PM - 8:00 PM)"),
    ("fullday", "Full Day (8:00 AM - 8:00 PM)"),
];

fn option_text<'a>(options: &[(&'static str, &'static str)], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(value, |&(_, text)| text)
}

/// Display text of the selected event-type option. Values without a known
/// option are shown as entered.
pub fn event_type_text(value: &str) -> &str {
    option_text(EVENT_TYPE_OPTIONS, value)
}

/// Display text of the selected event-time option.
pub fn event_time_text(value: &str) -> &str {
    option_text(EVENT_TIME_OPTIONS, value)
}

// ---------------------------------------------------------------------------
// Event date bounds
// ---------------------------------------------------------------------------

/// Earliest selectable event date: today, as an input value. Advisory only;
/// validation does not re-check it.
pub fn min_event_date(today: NaiveDate) -> String {
    today.format(INPUT_DATE_FORMAT).to_string()
}

/// Date prefilled on the payment-flow form: tomorrow.
pub fn default_event_date(today: NaiveDate) -> String {
    today
        .succ_opt()
        .unwrap_or(today)
        .format(INPUT_DATE_FORMAT)
        .to_string()
}

// ---------------------------------------------------------------------------
// BookingDraft
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub selected_package: Option<Package>,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub event_type: String,
    pub event_date: String,
    pub event_time: String,
    pub event_location: String,
    pub event_notes: String,
    pub payment_method: Option<PaymentMethod>,
    pub payment_confirmed: bool,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            selected_package: Some(DEFAULT_PACKAGE),
            client_name: String::new(),
            client_email: String::new(),
            client_phone: String::new(),
            event_type: String::new(),
            event_date: String::new(),
            event_time: String::new(),
            event_location: String::new(),
            event_notes: String::new(),
            payment_method: None,
            payment_confirmed: false,
        }
    }
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ClientName => &self.client_name,
            FormField::ClientEmail => &self.client_email,
            FormField::ClientPhone => &self.client_phone,
            FormField::EventType => &self.event_type,
            FormField::EventDate => &self.event_date,
            FormField::EventTime => &self.event_time,
            FormField::EventLocation => &self.event_location,
            FormField::EventNotes => &self.event_notes,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::ClientName => &mut self.client_name,
            FormField::ClientEmail => &mut self.client_email,
            FormField::ClientPhone => &mut self.client_phone,
            FormField::EventType => &mut self.event_type,
            FormField::EventDate => &mut self.event_date,
            FormField::EventTime => &mut self.event_time,
            FormField::EventLocation => &mut self.event_location,
            FormField::EventNotes => &mut self.event_notes,
        };
        *slot = value.into();
    }

    /// Whether `field` is non-empty. Whitespace counts as content.
    pub fn is_filled(&self, field: FormField) -> bool {
        !self.get(field).is_empty()
    }

    pub fn set_payment_confirmed(&mut self, confirmed: bool) {
        self.payment_confirmed = confirmed;
    }

    /// Payment method to show and record, falling back to bank transfer.
    pub fn effective_payment_method(&self) -> PaymentMethod {
        self.payment_method.unwrap_or(DEFAULT_PAYMENT_METHOD)
    }

    /// Reset every field, including the package selection, to its initial value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- FormField --

    #[test]
    fn field_names_parse_back() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()).unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert_matches!(
            FormField::from_name("payment-confirm"),
            Err(CoreError::UnknownField(_))
        );
    }

    // -- Option text --

    #[test]
    fn known_option_values_map_to_text() {
        assert_eq!(event_type_text("wedding"), "Wedding Photography");
        assert_eq!(event_time_text("morning"), "Morning (8:00 AM - 12:00 PM)");
    }

    #[test]
    fn unknown_option_values_pass_through() {
        assert_eq!(event_type_text("Wedding"), "Wedding");
        assert_eq!(event_time_text("10:00"), "10:00");
        assert_eq!(event_time_text(""), "");
    }

    // -- Event date bounds --

    #[test]
    fn min_date_is_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(min_event_date(today), "2026-10-16");
    }

    #[test]
    fn default_date_is_tomorrow_across_year_end() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(default_event_date(today), "2026-01-01");
    }

    // -- BookingDraft --

    #[test]
    fn default_draft_preselects_professional() {
        let draft = BookingDraft::new();
        assert_eq!(draft.selected_package, Some(Package::Professional));
        assert!(!draft.payment_confirmed);
        for field in FormField::ALL {
            assert_eq!(draft.get(field), "");
        }
    }

    #[test]
    fn set_then_get_each_field() {
        let mut draft = BookingDraft::new();
        for field in FormField::ALL {
            draft.set(field, field.name());
        }
        for field in FormField::ALL {
            assert_eq!(draft.get(field), field.name());
        }
    }

    #[test]
    fn only_empty_values_are_unfilled() {
        let mut draft = BookingDraft::new();
        assert!(!draft.is_filled(FormField::ClientName));
        draft.set(FormField::ClientName, "   ");
        assert!(draft.is_filled(FormField::ClientName));
        draft.set(FormField::ClientName, "Ana");
        assert!(draft.is_filled(FormField::ClientName));
    }

    #[test]
    fn clear_restores_defaults() {
        let mut draft = BookingDraft::new();
        draft.selected_package = Some(Package::Cinematic);
        draft.set(FormField::ClientEmail, "ana@x.com");
        draft.payment_method = Some(PaymentMethod::Dana);
        draft.set_payment_confirmed(true);

        draft.clear();

        assert_eq!(draft, BookingDraft::default());
    }

    #[test]
    fn payment_method_falls_back_to_bank_transfer() {
        let mut draft = BookingDraft::new();
        assert_eq!(draft.effective_payment_method(), PaymentMethod::BankTransfer);
        draft.payment_method = Some(PaymentMethod::Gopay);
        assert_eq!(draft.effective_payment_method(), PaymentMethod::Gopay);
    }
}
