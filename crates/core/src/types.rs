/// Booking record keys are creation times in epoch milliseconds.
pub type RecordId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Wizard steps are 1-based.
pub type StepNumber = u8;
