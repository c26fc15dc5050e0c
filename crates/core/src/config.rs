//! Wizard configuration, resolved once at construction.

use crate::error::CoreError;
use crate::types::StepNumber;

/// Default size of the capped recent-bookings list.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Which optional wizard regions exist and how persistence is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardConfig {
    /// Insert a payment step between scheduling and review (5 steps instead of 4).
    pub payment_step: bool,
    /// Maximum entries kept in the recent-bookings list.
    pub recent_limit: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            payment_step: false,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl WizardConfig {
    /// 5-step flow with the payment step enabled.
    pub fn with_payment() -> Self {
        Self {
            payment_step: true,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `LUMIERE_PAYMENT_STEP` | `false` |
    /// | `LUMIERE_RECENT_LIMIT` | `10`    |
    pub fn from_env() -> Result<Self, CoreError> {
        let payment_step = match std::env::var("LUMIERE_PAYMENT_STEP") {
            Ok(v) => parse_bool(&v).ok_or_else(|| {
                CoreError::Config(format!("LUMIERE_PAYMENT_STEP must be a boolean, got '{v}'"))
            })?,
            Err(_) => false,
        };

        let recent_limit = match std::env::var("LUMIERE_RECENT_LIMIT") {
            Ok(v) => v.trim().parse::<usize>().map_err(|_| {
                CoreError::Config(format!(
                    "LUMIERE_RECENT_LIMIT must be a positive integer, got '{v}'"
                ))
            })?,
            Err(_) => DEFAULT_RECENT_LIMIT,
        };

        let config = Self {
            payment_step,
            recent_limit,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.recent_limit == 0 {
            return Err(CoreError::Config(
                "recent_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Total number of wizard steps.
    pub fn step_count(&self) -> StepNumber {
        if self.payment_step {
            5
        } else {
            4
        }
    }

    /// Step number of the payment step, if configured.
    pub fn payment_step_number(&self) -> Option<StepNumber> {
        self.payment_step.then_some(4)
    }

    /// The final review step, where the summary is shown and submit happens.
    pub fn review_step(&self) -> StepNumber {
        self.step_count()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
