//! `lumiere-console` -- terminal front-end for the studio booking wizard.
//!
//! Reads line commands from stdin and persists submitted bookings as JSON
//! files. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default  | Description                          |
//! |------------------------|----------|----------|--------------------------------------|
//! | `LUMIERE_DATA_DIR`     | no       | `./data` | Directory for the JSON list files    |
//! | `LUMIERE_PAYMENT_STEP` | no       | `false`  | Insert the payment step (5 steps)    |
//! | `LUMIERE_RECENT_LIMIT` | no       | `10`     | Size of the recent-bookings list     |

use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumiere_console::session;
use lumiere_console::terminal::TerminalView;
use lumiere_core::config::WizardConfig;
use lumiere_core::draft::min_event_date;
use lumiere_core::wizard::BookingWizard;
use lumiere_store::{JsonFileStore, StoreConfig};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "lumiere_console=info,lumiere_core=info,lumiere_store=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        tracing::error!(error = %format!("{e:#}"), "Console exited with an error");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let wizard_config = WizardConfig::from_env().context("Failed to load wizard configuration")?;
    let store_config = StoreConfig::from_env().context("Failed to load store configuration")?;

    let store = JsonFileStore::open(&store_config).with_context(|| {
        format!(
            "Failed to open data directory {}",
            store_config.data_dir.display()
        )
    })?;

    tracing::info!(
        data_dir = %store_config.data_dir.display(),
        steps = wizard_config.step_count(),
        recent_limit = wizard_config.recent_limit,
        "Starting lumiere-console",
    );

    let mut wizard = BookingWizard::new(store, wizard_config)?;
    let today = chrono::Local::now().date_naive();
    if wizard_config.payment_step {
        wizard.prefill_event_date(today);
    }

    let stdout = io::stdout();
    let mut view = TerminalView::new(stdout.lock(), wizard_config);
    view.line("Lumière Studio booking. Type 'help' for commands.");
    view.line(&format!("Earliest event date: {}", min_event_date(today)));

    let report = session::run(&mut wizard, io::stdin().lock(), &mut view)
        .context("Failed to read console input")?;

    if report.submitted > 0 {
        view.line(&format!("{} booking(s) submitted.", report.submitted));
    }
    Ok(())
}
