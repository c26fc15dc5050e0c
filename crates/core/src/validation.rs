//! Per-step validation for the booking wizard.
//!
//! Each step has one predicate over the current [`BookingDraft`]. Predicates
//! report the first failing condition only; errors are never aggregated.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::WizardConfig;
use crate::draft::{BookingDraft, FormField};
use crate::types::StepNumber;

/// `local@domain.tld`: one `@`, a dot after it, no whitespace.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A user-correctable reason a step cannot be left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a package before proceeding.")]
    NoPackageSelected,

    #[error("Please fill in all required fields.")]
    MissingClientDetails,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please fill in all required fields in Date & Time.")]
    MissingSchedule,

    #[error("Please confirm that you have made the payment.")]
    PaymentNotConfirmed,
}

impl ValidationError {
    /// The step whose predicate produced this error.
    pub fn step(self) -> StepNumber {
        match self {
            Self::NoPackageSelected => 1,
            Self::MissingClientDetails | Self::InvalidEmail => 2,
            Self::MissingSchedule => 3,
            Self::PaymentNotConfirmed => 4,
        }
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether `email` looks like `local@domain.tld`. Only ASCII is accepted.
pub fn is_valid_email(email: &str) -> bool {
    email.is_ascii() && EMAIL_RE.is_match(email)
}

fn validate_package(draft: &BookingDraft) -> Result<(), ValidationError> {
    if draft.selected_package.is_none() {
        return Err(ValidationError::NoPackageSelected);
    }
    Ok(())
}

fn validate_client_details(draft: &BookingDraft) -> Result<(), ValidationError> {
    let required = [
        FormField::ClientName,
        FormField::ClientEmail,
        FormField::ClientPhone,
        FormField::EventType,
    ];
    if !required.into_iter().all(|field| draft.is_filled(field)) {
        return Err(ValidationError::MissingClientDetails);
    }
    if !is_valid_email(&draft.client_email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

fn validate_schedule(draft: &BookingDraft) -> Result<(), ValidationError> {
    let required = [
        FormField::EventDate,
        FormField::EventTime,
        FormField::EventLocation,
    ];
    if !required.into_iter().all(|field| draft.is_filled(field)) {
        return Err(ValidationError::MissingSchedule);
    }
    Ok(())
}

fn validate_payment(draft: &BookingDraft) -> Result<(), ValidationError> {
    if !draft.payment_confirmed {
        return Err(ValidationError::PaymentNotConfirmed);
    }
    Ok(())
}

/// Validate that `step` may be left going forward.
///
/// The review step and steps outside the configured range have no
/// precondition and always pass.
pub fn validate_step(
    step: StepNumber,
    draft: &BookingDraft,
    config: &WizardConfig,
) -> Result<(), ValidationError> {
    match step {
        1 => validate_package(draft),
        2 => validate_client_details(draft),
        3 => validate_schedule(draft),
        s if config.payment_step_number() == Some(s) => validate_payment(draft),
        _ => Ok(()),
    }
}

/// Validate every data-entry step in order, returning the first failure.
pub fn validate_for_submit(
    draft: &BookingDraft,
    config: &WizardConfig,
) -> Result<(), ValidationError> {
    (1..config.review_step()).try_for_each(|step| validate_step(step, draft, config))
}
