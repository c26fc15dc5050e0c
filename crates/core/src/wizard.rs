//! Booking wizard: step state machine, view seam, and the facade that ties
//! the draft, validation, summaries and record store together.
//!
//! Steps are 1-based. The 4-step flow is Package, Details, Schedule, Review;
//! enabling [`WizardConfig::payment_step`] inserts Payment before Review.
//! Moving forward to step `k` requires step `k - 1` to validate; moving back
//! is always allowed.

use chrono::NaiveDate;

use crate::booking_store::{BookingRecordStore, NotificationBadge};
use crate::config::WizardConfig;
use crate::draft::{default_event_date, BookingDraft, FormField};
use crate::error::CoreError;
use crate::package::Package;
use crate::payment::PaymentMethod;
use crate::records::BookingRecord;
use crate::storage::ListStore;
use crate::summary::{BookingSummary, PaymentSummary};
use crate::types::StepNumber;
use crate::validation::{validate_for_submit, validate_step};

/// First wizard step.
pub const FIRST_STEP: StepNumber = 1;

/// Shown after a failed submit, following the specific reason.
pub const SUBMIT_INCOMPLETE_MESSAGE: &str = "Please complete all required fields correctly.";

/// Shown after a successful submit in the 4-step flow.
pub const BOOKING_CONFIRMED_MESSAGE: &str = "Booking confirmed! Thank you for choosing Lumière Studio. \
     We will contact you shortly to confirm details.";

/// Shown after a successful submit in the payment flow.
pub const BOOKING_AWAITING_PAYMENT_MESSAGE: &str =
    "Booking submitted successfully! Admin will contact you to confirm payment.";

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Package,
    Details,
    Schedule,
    Payment,
    Review,
}

impl WizardStep {
    /// Resolve a step number under `config`.
    pub fn at(step: StepNumber, config: &WizardConfig) -> Result<Self, CoreError> {
        match (step, config.payment_step) {
            (1, _) => Ok(Self::Package),
            (2, _) => Ok(Self::Details),
            (3, _) => Ok(Self::Schedule),
            (4, true) => Ok(Self::Payment),
            (4, false) | (5, true) => Ok(Self::Review),
            _ => Err(CoreError::StepOutOfRange {
                step,
                max: config.step_count(),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Package => "Choose Package",
            Self::Details => "Your Details",
            Self::Schedule => "Date & Time",
            Self::Payment => "Payment",
            Self::Review => "Confirmation",
        }
    }
}

/// Visual state of a step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIndicator {
    Neutral,
    Active,
    Completed,
}

/// Scroll targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The booking section as a whole.
    BookingFlow,
    /// The panel area of the step form.
    BookingForm,
}

// ---------------------------------------------------------------------------
// View seam
// ---------------------------------------------------------------------------

/// Rendering side effects requested by the wizard. Implementations own how
/// (or whether) each one is drawn.
pub trait View {
    fn mark_step(&mut self, step: StepNumber, indicator: StepIndicator);
    /// Show the panel for `step` and hide every other panel.
    fn show_panel(&mut self, step: StepNumber);
    fn scroll_to(&mut self, container: Container);
    /// Blocking user-facing message.
    fn show_message(&mut self, message: &str);
    fn render_summary(&mut self, summary: &BookingSummary);
    fn render_payment_summary(&mut self, summary: &PaymentSummary);
}

// ---------------------------------------------------------------------------
// StepMachine
// ---------------------------------------------------------------------------

/// Current-step tracker with the forward validation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMachine {
    config: WizardConfig,
    current: StepNumber,
}

impl StepMachine {
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            current: FIRST_STEP,
        }
    }

    pub fn current(&self) -> StepNumber {
        self.current
    }

    pub fn step_count(&self) -> StepNumber {
        self.config.step_count()
    }

    fn check_range(&self, step: StepNumber) -> Result<(), CoreError> {
        let max = self.step_count();
        if step < FIRST_STEP || step > max {
            return Err(CoreError::StepOutOfRange { step, max });
        }
        Ok(())
    }

    /// Move forward to `target` if the step before it validates.
    ///
    /// Any in-range target may be requested, but only `target - 1` is
    /// checked. On failure `current` is unchanged.
    pub fn advance(
        &mut self,
        target: StepNumber,
        draft: &BookingDraft,
    ) -> Result<StepNumber, CoreError> {
        self.check_range(target)?;
        if target > FIRST_STEP {
            validate_step(target - 1, draft, &self.config)?;
        }
        self.current = target;
        Ok(target)
    }

    /// Move to `target` without any validation.
    pub fn retreat(&mut self, target: StepNumber) -> Result<StepNumber, CoreError> {
        self.check_range(target)?;
        self.current = target;
        Ok(target)
    }

    pub fn indicator(&self, step: StepNumber) -> StepIndicator {
        match step.cmp(&self.current) {
            std::cmp::Ordering::Less => StepIndicator::Completed,
            std::cmp::Ordering::Equal => StepIndicator::Active,
            std::cmp::Ordering::Greater => StepIndicator::Neutral,
        }
    }

    pub fn reset(&mut self) {
        self.current = FIRST_STEP;
    }
}

// ---------------------------------------------------------------------------
// BookingWizard
// ---------------------------------------------------------------------------

/// Result of a successful step change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub step: StepNumber,
    /// Built when arriving at the review step.
    pub summary: Option<BookingSummary>,
    /// Built when arriving at the payment step.
    pub payment: Option<PaymentSummary>,
}

#[derive(Debug)]
pub struct BookingWizard<S> {
    config: WizardConfig,
    machine: StepMachine,
    draft: BookingDraft,
    records: BookingRecordStore<S>,
}

impl<S: ListStore> BookingWizard<S> {
    pub fn new(store: S, config: WizardConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            config,
            machine: StepMachine::new(config),
            draft: BookingDraft::new(),
            records: BookingRecordStore::new(store, &config),
        })
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn current_step(&self) -> StepNumber {
        self.machine.current()
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Form surface for field edits between transitions.
    pub fn draft_mut(&mut self) -> &mut BookingDraft {
        &mut self.draft
    }

    pub fn records(&self) -> &BookingRecordStore<S> {
        &self.records
    }

    pub fn badge(&self) -> NotificationBadge {
        self.records.badge()
    }

    /// Select (or with `None`, deselect) a package on step 1.
    pub fn select_package(&mut self, package: Option<Package>) {
        self.draft.selected_package = package;
    }

    /// Pick a payment method. On the payment step the payment summary is
    /// re-rendered and returned.
    pub fn select_payment_method(
        &mut self,
        method: PaymentMethod,
        view: &mut impl View,
    ) -> Option<PaymentSummary> {
        self.draft.payment_method = Some(method);
        if self.config.payment_step_number() != Some(self.machine.current()) {
            return None;
        }
        let summary = PaymentSummary::build(&self.draft);
        view.render_payment_summary(&summary);
        Some(summary)
    }

    /// Pricing-section shortcut: select the named package, return to step 1
    /// and bring the booking section into view.
    pub fn select_package_by_name(
        &mut self,
        name: &str,
        view: &mut impl View,
    ) -> Result<Arrival, CoreError> {
        let package = Package::from_name(name)?;
        self.select_package(Some(package));
        let arrival = self.retreat(FIRST_STEP, view)?;
        view.scroll_to(Container::BookingFlow);
        Ok(arrival)
    }

    /// Prefill an empty event date with tomorrow.
    pub fn prefill_event_date(&mut self, today: NaiveDate) {
        if !self.draft.is_filled(FormField::EventDate) {
            self.draft.set(FormField::EventDate, default_event_date(today));
        }
    }

    pub fn advance(
        &mut self,
        target: StepNumber,
        view: &mut impl View,
    ) -> Result<Arrival, CoreError> {
        match self.machine.advance(target, &self.draft) {
            Ok(step) => Ok(self.arrive(step, view)),
            Err(e) => {
                if let CoreError::Validation(reason) = &e {
                    tracing::debug!(
                        requested = target,
                        step = reason.step(),
                        %reason,
                        "Step transition blocked"
                    );
                    view.show_message(&reason.to_string());
                }
                Err(e)
            }
        }
    }

    pub fn retreat(
        &mut self,
        target: StepNumber,
        view: &mut impl View,
    ) -> Result<Arrival, CoreError> {
        let step = self.machine.retreat(target)?;
        Ok(self.arrive(step, view))
    }

    /// Re-render indicators and the active panel for the current step.
    pub fn render(&self, view: &mut impl View) {
        for step in FIRST_STEP..=self.machine.step_count() {
            view.mark_step(step, self.machine.indicator(step));
        }
        view.show_panel(self.machine.current());
    }

    fn arrive(&self, step: StepNumber, view: &mut impl View) -> Arrival {
        self.render(view);

        let payment = (self.config.payment_step_number() == Some(step))
            .then(|| PaymentSummary::build(&self.draft));
        if let Some(summary) = &payment {
            view.render_payment_summary(summary);
        }

        let summary = (step == self.config.review_step())
            .then(|| BookingSummary::build(&self.draft, &self.config));
        if let Some(summary) = &summary {
            view.render_summary(summary);
        }

        view.scroll_to(Container::BookingForm);

        Arrival {
            step,
            summary,
            payment,
        }
    }

    /// Validate every step, persist the booking and reset the wizard.
    ///
    /// Only allowed from the review step; anywhere else nothing is stored.
    pub fn submit(&mut self, view: &mut impl View) -> Result<BookingRecord, CoreError> {
        let review = self.config.review_step();
        if self.machine.current() != review {
            tracing::debug!(step = self.machine.current(), review, "Submit outside review step");
            return Err(CoreError::NotOnReviewStep {
                step: self.machine.current(),
                review,
            });
        }

        if let Err(reason) = validate_for_submit(&self.draft, &self.config) {
            tracing::debug!(step = reason.step(), %reason, "Submit blocked");
            view.show_message(&reason.to_string());
            view.show_message(SUBMIT_INCOMPLETE_MESSAGE);
            return Err(reason.into());
        }

        let record = self.records.persist(&self.draft, self.config.payment_step);

        view.show_message(if self.config.payment_step {
            BOOKING_AWAITING_PAYMENT_MESSAGE
        } else {
            BOOKING_CONFIRMED_MESSAGE
        });

        self.draft.clear();
        self.machine.reset();
        self.arrive(FIRST_STEP, view);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::validation::ValidationError;
    use assert_matches::assert_matches;

    fn filled_draft() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.selected_package = Some(Package::Basic);
        draft.set(FormField::ClientName, "Ana");
        draft.set(FormField::ClientEmail, "ana@x.com");
        draft.set(FormField::ClientPhone, "123");
        draft.set(FormField::EventType, "Wedding");
        draft.set(FormField::EventDate, "2025-01-01");
        draft.set(FormField::EventTime, "10:00");
        draft.set(FormField::EventLocation, "Hall A");
        draft
    }

    // -- WizardStep --

    #[test]
    fn step_labels_follow_flow() {
        let four = WizardConfig::default();
        let five = WizardConfig::with_payment();
        assert_eq!(WizardStep::at(4, &four).unwrap(), WizardStep::Review);
        assert_eq!(WizardStep::at(4, &five).unwrap(), WizardStep::Payment);
        assert_eq!(WizardStep::at(5, &five).unwrap(), WizardStep::Review);
        assert_matches!(
            WizardStep::at(5, &four),
            Err(CoreError::StepOutOfRange { step: 5, max: 4 })
        );
        assert_matches!(WizardStep::at(0, &five), Err(CoreError::StepOutOfRange { .. }));
    }

    // -- StepMachine --

    #[test]
    fn machine_starts_at_step_one() {
        let machine = StepMachine::new(WizardConfig::default());
        assert_eq!(machine.current(), 1);
        assert_eq!(machine.step_count(), 4);
    }

    #[test]
    fn advance_without_package_stays_on_step_one() {
        let mut machine = StepMachine::new(WizardConfig::default());
        let mut draft = filled_draft();
        draft.selected_package = None;
        assert_matches!(
            machine.advance(2, &draft),
            Err(CoreError::Validation(ValidationError::NoPackageSelected))
        );
        assert_eq!(machine.current(), 1);
    }

    #[test]
    fn advance_checks_only_preceding_step() {
        let mut machine = StepMachine::new(WizardConfig::default());
        let mut draft = filled_draft();
        draft.set(FormField::ClientEmail, "");
        // Step 3 data is complete, so jumping straight to 4 passes.
        assert_eq!(machine.advance(4, &draft).unwrap(), 4);
    }

    #[test]
    fn advance_out_of_range_is_rejected() {
        let mut machine = StepMachine::new(WizardConfig::default());
        let draft = filled_draft();
        assert_matches!(
            machine.advance(5, &draft),
            Err(CoreError::StepOutOfRange { step: 5, max: 4 })
        );
        assert_matches!(machine.advance(0, &draft), Err(CoreError::StepOutOfRange { .. }));
        assert_eq!(machine.current(), 1);
    }

    #[test]
    fn retreat_ignores_field_contents() {
        let config = WizardConfig::with_payment();
        let empty = BookingDraft {
            selected_package: None,
            ..BookingDraft::new()
        };
        let mut machine = StepMachine::new(config);
        for step in 1..=5 {
            assert_eq!(machine.retreat(step).unwrap(), step);
            assert_eq!(machine.current(), step);
        }
        assert!(machine.advance(2, &empty).is_err());
        assert_eq!(machine.current(), 5);
    }

    #[test]
    fn retreat_out_of_range_is_rejected() {
        let mut machine = StepMachine::new(WizardConfig::default());
        assert_matches!(machine.retreat(7), Err(CoreError::StepOutOfRange { step: 7, .. }));
        assert_eq!(machine.current(), 1);
    }

    #[test]
    fn indicators_derive_from_current() {
        let mut machine = StepMachine::new(WizardConfig::default());
        machine.retreat(3).unwrap();
        assert_eq!(machine.indicator(1), StepIndicator::Completed);
        assert_eq!(machine.indicator(2), StepIndicator::Completed);
        assert_eq!(machine.indicator(3), StepIndicator::Active);
        assert_eq!(machine.indicator(4), StepIndicator::Neutral);
    }

    #[test]
    fn reset_returns_to_first_step() {
        let mut machine = StepMachine::new(WizardConfig::default());
        machine.retreat(4).unwrap();
        machine.reset();
        assert_eq!(machine.current(), FIRST_STEP);
    }

    // -- BookingWizard --

    #[test]
    fn wizard_rejects_invalid_config() {
        let config = WizardConfig {
            recent_limit: 0,
            ..WizardConfig::default()
        };
        assert_matches!(
            BookingWizard::new(MemoryStore::new(), config),
            Err(CoreError::Config(_))
        );
    }

    #[test]
    fn prefill_only_fills_empty_date() {
        let mut wizard =
            BookingWizard::new(MemoryStore::new(), WizardConfig::with_payment()).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        wizard.prefill_event_date(today);
        assert_eq!(wizard.draft().event_date, "2026-10-17");

        wizard.draft_mut().set(FormField::EventDate, "2026-12-24");
        wizard.prefill_event_date(today);
        assert_eq!(wizard.draft().event_date, "2026-12-24");
    }
}
