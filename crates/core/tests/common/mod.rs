//! Shared helpers for wizard integration tests.

#![allow(dead_code)]

use lumiere_core::draft::{BookingDraft, FormField};
use lumiere_core::package::Package;
use lumiere_core::summary::{BookingSummary, PaymentSummary};
use lumiere_core::types::StepNumber;
use lumiere_core::wizard::{Container, StepIndicator, View};

/// One side effect requested by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Mark(StepNumber, StepIndicator),
    Panel(StepNumber),
    Scroll(Container),
    Message(String),
    Summary(BookingSummary),
    PaymentSummary(PaymentSummary),
}

/// A [`View`] that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Message(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_panel(&self) -> Option<StepNumber> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Panel(step) => Some(*step),
            _ => None,
        })
    }

    pub fn last_summary(&self) -> Option<&BookingSummary> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Summary(s) => Some(s),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl View for RecordingView {
    fn mark_step(&mut self, step: StepNumber, indicator: StepIndicator) {
        self.events.push(ViewEvent::Mark(step, indicator));
    }

    fn show_panel(&mut self, step: StepNumber) {
        self.events.push(ViewEvent::Panel(step));
    }

    fn scroll_to(&mut self, container: Container) {
        self.events.push(ViewEvent::Scroll(container));
    }

    fn show_message(&mut self, message: &str) {
        self.events.push(ViewEvent::Message(message.to_string()));
    }

    fn render_summary(&mut self, summary: &BookingSummary) {
        self.events.push(ViewEvent::Summary(summary.clone()));
    }

    fn render_payment_summary(&mut self, summary: &PaymentSummary) {
        self.events.push(ViewEvent::PaymentSummary(summary.clone()));
    }
}

/// Fill `draft` with the reference booking used across tests.
pub fn fill_reference_booking(draft: &mut BookingDraft) {
    draft.selected_package = Some(Package::Basic);
    draft.set(FormField::ClientName, "Ana");
    draft.set(FormField::ClientEmail, "ana@x.com");
    draft.set(FormField::ClientPhone, "123");
    draft.set(FormField::EventType, "Wedding");
    draft.set(FormField::EventDate, "2025-01-01");
    draft.set(FormField::EventTime, "10:00");
    draft.set(FormField::EventLocation, "Hall A");
}
