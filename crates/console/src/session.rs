//! Command loop driving a [`BookingWizard`] from line input.

use std::io::{self, BufRead, Write};

use lumiere_core::draft::FormField;
use lumiere_core::error::CoreError;
use lumiere_core::payment::PaymentMethod;
use lumiere_core::storage::ListStore;
use lumiere_core::wizard::{BookingWizard, View, FIRST_STEP};

use crate::command::{Command, HELP};
use crate::terminal::TerminalView;

/// What the loop did before input ended or `quit` was read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub commands: usize,
    pub submitted: usize,
}

/// Read commands until EOF or `quit`, applying each to `wizard`.
pub fn run<S, R, W>(
    wizard: &mut BookingWizard<S>,
    input: R,
    view: &mut TerminalView<W>,
) -> io::Result<SessionReport>
where
    S: ListStore,
    R: BufRead,
    W: Write,
{
    let mut report = SessionReport::default();
    wizard.render(view);

    for line in input.lines() {
        let command = match Command::parse(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                view.show_message(&e.to_string());
                continue;
            }
        };
        report.commands += 1;

        if command == Command::Quit {
            break;
        }
        if apply(wizard, command, view) {
            report.submitted += 1;
        }
    }

    tracing::info!(
        commands = report.commands,
        submitted = report.submitted,
        "Console session ended"
    );
    Ok(report)
}

/// Apply one command. Returns `true` when a booking was submitted.
fn apply<S: ListStore, W: Write>(
    wizard: &mut BookingWizard<S>,
    command: Command,
    view: &mut TerminalView<W>,
) -> bool {
    let result = match command {
        Command::Package(Some(name)) => wizard.select_package_by_name(&name, view).map(drop),
        Command::Package(None) => {
            wizard.select_package(None);
            Ok(())
        }
        Command::Set { field, value } => FormField::from_name(&field).map(|field| {
            wizard.draft_mut().set(field, value);
        }),
        Command::Method(name) => PaymentMethod::from_name(&name).map(|method| {
            wizard.select_payment_method(method, view);
        }),
        Command::Confirm(confirmed) => {
            wizard.draft_mut().set_payment_confirmed(confirmed);
            Ok(())
        }
        Command::Next => {
            let target = wizard.current_step().saturating_add(1);
            wizard.advance(target, view).map(drop)
        }
        Command::Back => {
            let target = wizard.current_step().saturating_sub(1).max(FIRST_STEP);
            wizard.retreat(target, view).map(drop)
        }
        Command::Goto(target) if target > wizard.current_step() => {
            wizard.advance(target, view).map(drop)
        }
        Command::Goto(target) => wizard.retreat(target, view).map(drop),
        Command::Submit => match wizard.submit(view) {
            Ok(record) => {
                view.line(&format!("Booking #{} saved ({}).", record.id, record.package));
                return true;
            }
            Err(e) => Err(e),
        },
        Command::Status => {
            print_status(wizard, view);
            Ok(())
        }
        Command::Help => {
            view.line(HELP);
            Ok(())
        }
        Command::Quit => Ok(()),
    };

    match result {
        Ok(()) => {}
        // The wizard has already shown validation reasons.
        Err(CoreError::Validation(_)) => {}
        Err(e) => view.show_message(&e.to_string()),
    }
    false
}

fn print_status<S: ListStore, W: Write>(wizard: &BookingWizard<S>, view: &mut TerminalView<W>) {
    let draft = wizard.draft();
    view.line(&format!(
        "Step {} of {}",
        wizard.current_step(),
        wizard.config().step_count()
    ));
    view.line(&format!(
        "  package         {}",
        draft.selected_package.map_or("(none)", |p| p.as_str())
    ));
    for field in FormField::ALL {
        view.line(&format!("  {:<15} {}", field.name(), draft.get(field)));
    }
    if wizard.config().payment_step {
        view.line(&format!(
            "  payment         {} ({})",
            draft.effective_payment_method().label(),
            if draft.payment_confirmed { "confirmed" } else { "not confirmed" }
        ));
    }
    if let Some(text) = wizard.badge().text() {
        view.line(&format!("Unread admin notifications: {text}"));
    }
}
