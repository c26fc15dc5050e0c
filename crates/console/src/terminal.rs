//! Plain-text rendering of wizard side effects.

use std::io::Write;

use lumiere_core::config::WizardConfig;
use lumiere_core::summary::{BookingSummary, PaymentSummary};
use lumiere_core::types::StepNumber;
use lumiere_core::wizard::{Container, StepIndicator, View, WizardStep};

/// Writes indicators, panels, messages and summaries as lines of text.
///
/// Step indicators are buffered and printed as one progress line when the
/// panel is shown, e.g. `[x] Choose Package  [>] Your Details  [ ] ...`.
pub struct TerminalView<W: Write> {
    out: W,
    config: WizardConfig,
    indicators: Vec<(StepNumber, StepIndicator)>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, config: WizardConfig) -> Self {
        Self {
            out,
            config,
            indicators: Vec::new(),
        }
    }

    /// Print one line. Write failures are logged, not returned.
    pub fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn step_label(&self, step: StepNumber) -> &'static str {
        WizardStep::at(step, &self.config).map_or("?", WizardStep::label)
    }
}

impl<W: Write> View for TerminalView<W> {
    fn mark_step(&mut self, step: StepNumber, indicator: StepIndicator) {
        self.indicators.push((step, indicator));
    }

    fn show_panel(&mut self, step: StepNumber) {
        let progress = std::mem::take(&mut self.indicators)
            .into_iter()
            .map(|(s, indicator)| {
                let mark = match indicator {
                    StepIndicator::Completed => "x",
                    StepIndicator::Active => ">",
                    StepIndicator::Neutral => " ",
                };
                format!("[{mark}] {}", self.step_label(s))
            })
            .collect::<Vec<_>>()
            .join("  ");
        if !progress.is_empty() {
            self.line(&progress);
        }
        let label = self.step_label(step);
        self.line(&format!("== Step {step}: {label} =="));
    }

    fn scroll_to(&mut self, container: Container) {
        tracing::trace!(?container, "Scroll requested");
    }

    fn show_message(&mut self, message: &str) {
        self.line(&format!("! {message}"));
    }

    fn render_summary(&mut self, summary: &BookingSummary) {
        let mut rows = vec![
            ("Package", summary.package.as_str()),
            ("Name", summary.client_name.as_str()),
            ("Email", summary.client_email.as_str()),
            ("Phone", summary.client_phone.as_str()),
            ("Event", summary.event_type.as_str()),
            ("Date", summary.event_date.as_str()),
            ("Time", summary.event_time.as_str()),
            ("Location", summary.event_location.as_str()),
        ];
        if !summary.event_notes.is_empty() {
            rows.push(("Notes", summary.event_notes.as_str()));
        }
        if let Some(method) = &summary.payment_method {
            rows.push(("Payment", method.as_str()));
        }
        for (label, value) in rows {
            self.line(&format!("  {label:<9} {value}"));
        }
    }

    fn render_payment_summary(&mut self, summary: &PaymentSummary) {
        self.line(&format!("  Package   {}", summary.package));
        self.line(&format!("  Total     {}", summary.total));
        self.line(&format!("  Pay with  {}", summary.method));
    }
}
