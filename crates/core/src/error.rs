use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Step {step} is out of range (1..{max})")]
    StepOutOfRange { step: u8, max: u8 },

    #[error("Bookings can only be submitted from the review step (step {review}), not step {step}")]
    NotOnReviewStep { step: u8, review: u8 },

    #[error("Unknown package '{0}'. Must be one of: basic, professional, cinematic")]
    UnknownPackage(String),

    #[error("Unknown form field '{0}'")]
    UnknownField(String),

    #[error("Unknown payment method '{0}'. Must be one of: bank, qris, dana, gopay")]
    UnknownPaymentMethod(String),

    #[error("Invalid booking status '{0}'. Must be one of: pending, confirmed, completed, cancelled")]
    UnknownStatus(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
