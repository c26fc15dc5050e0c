//! Persisted booking and admin-notification records.
//!
//! Field names serialize in camelCase so stored lists stay readable by the
//! admin dashboard that consumes the same keys.

use serde::{Deserialize, Serialize};

use crate::draft::{event_time_text, event_type_text, BookingDraft};
use crate::error::CoreError;
use crate::package::DEFAULT_PACKAGE;
use crate::types::{RecordId, Timestamp};

// ---------------------------------------------------------------------------
// Booking status
// ---------------------------------------------------------------------------

/// Status of a persisted booking. The client only ever writes `Pending`;
/// the other values are set by the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

// ---------------------------------------------------------------------------
// BookingRecord
// ---------------------------------------------------------------------------

/// Immutable snapshot of a submitted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: RecordId,
    /// Package display line, e.g. `"Basic - $499"`.
    pub package: String,
    pub price: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    /// Option text, not the raw select value.
    pub event_type: String,
    /// Raw `YYYY-MM-DD` input value.
    pub event_date: String,
    pub event_time: String,
    pub event_location: String,
    #[serde(default)]
    pub event_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub status: BookingStatus,
    pub timestamp: Timestamp,
}

impl BookingRecord {
    /// Snapshot `draft` with the given id and creation time.
    ///
    /// A draft without a package is recorded under the default package; the
    /// wizard never submits one because step 1 validation rejects it.
    pub fn from_draft(
        id: RecordId,
        draft: &BookingDraft,
        with_payment: bool,
        timestamp: Timestamp,
    ) -> Self {
        let package = draft.selected_package.unwrap_or(DEFAULT_PACKAGE);
        Self {
            id,
            package: package.display_line(),
            price: package.price().to_string(),
            client_name: draft.client_name.clone(),
            client_email: draft.client_email.clone(),
            client_phone: draft.client_phone.clone(),
            event_type: event_type_text(&draft.event_type).to_string(),
            event_date: draft.event_date.clone(),
            event_time: event_time_text(&draft.event_time).to_string(),
            event_location: draft.event_location.clone(),
            event_notes: draft.event_notes.clone(),
            payment_method: with_payment
                .then(|| draft.effective_payment_method().label().to_string()),
            status: BookingStatus::Pending,
            timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewBooking,
}

/// Admin-facing notice that a booking came in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub client_name: String,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub read: bool,
}

impl NotificationRecord {
    pub fn new_booking(record: &BookingRecord) -> Self {
        Self {
            kind: NotificationKind::NewBooking,
            client_name: record.client_name.clone(),
            timestamp: record.timestamp,
            read: false,
        }
    }
}
