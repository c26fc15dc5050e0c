//! Booking record persistence and the admin notification counter.
//!
//! [`BookingRecordStore`] keeps three lists in a [`ListStore`]: every booking
//! in submission order, a newest-first recent list capped at
//! [`WizardConfig::recent_limit`], and one admin notification per booking.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::WizardConfig;
use crate::draft::BookingDraft;
use crate::records::{BookingRecord, NotificationRecord};
use crate::storage::{ListStore, KEY_ADMIN_NOTIFICATIONS, KEY_BOOKINGS, KEY_RECENT_BOOKINGS};
use crate::types::{RecordId, Timestamp};

// ---------------------------------------------------------------------------
// Notification badge
// ---------------------------------------------------------------------------

/// Display state of the unread-notifications badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBadge {
    Hidden,
    Visible(usize),
}

impl NotificationBadge {
    pub fn from_count(unread: usize) -> Self {
        if unread == 0 {
            Self::Hidden
        } else {
            Self::Visible(unread)
        }
    }

    /// Badge text, or `None` when the badge is hidden.
    pub fn text(self) -> Option<String> {
        match self {
            Self::Hidden => None,
            Self::Visible(n) => Some(n.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// BookingRecordStore
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct BookingRecordStore<S> {
    store: S,
    recent_limit: usize,
}

impl<S: ListStore> BookingRecordStore<S> {
    pub fn new(store: S, config: &WizardConfig) -> Self {
        Self {
            store,
            recent_limit: config.recent_limit.max(1),
        }
    }

    /// Persist a snapshot of `draft` created now.
    pub fn persist(&self, draft: &BookingDraft, with_payment: bool) -> BookingRecord {
        self.persist_at(draft, with_payment, chrono::Utc::now())
    }

    /// Persist a snapshot of `draft` created at `now`.
    ///
    /// Not idempotent: every call appends a new record with a fresh id, even
    /// for identical drafts.
    pub fn persist_at(
        &self,
        draft: &BookingDraft,
        with_payment: bool,
        now: Timestamp,
    ) -> BookingRecord {
        let mut bookings = self.store.load_list(KEY_BOOKINGS);
        let id = next_record_id(&bookings, now);
        let record = BookingRecord::from_draft(id, draft, with_payment, now);

        let Some(value) = to_value(&record) else {
            return record;
        };

        bookings.push(value.clone());
        self.store.save_list(KEY_BOOKINGS, &bookings);

        let mut recent = self.store.load_list(KEY_RECENT_BOOKINGS);
        recent.insert(0, value);
        recent.truncate(self.recent_limit);
        self.store.save_list(KEY_RECENT_BOOKINGS, &recent);

        self.notify_new_booking(&record);

        tracing::info!(
            booking_id = record.id,
            client = %record.client_name,
            package = %record.package,
            "Booking persisted",
        );

        record
    }

    fn notify_new_booking(&self, record: &BookingRecord) {
        let Some(value) = to_value(&NotificationRecord::new_booking(record)) else {
            return;
        };
        let mut notifications = self.store.load_list(KEY_ADMIN_NOTIFICATIONS);
        notifications.push(value);
        self.store.save_list(KEY_ADMIN_NOTIFICATIONS, &notifications);

        tracing::debug!(unread = self.unread_count(), "Admin notification added");
    }

    /// Every booking, oldest first.
    pub fn all(&self) -> Vec<BookingRecord> {
        self.load_typed(KEY_BOOKINGS)
    }

    /// Most recent bookings, newest first.
    pub fn recent(&self) -> Vec<BookingRecord> {
        self.load_typed(KEY_RECENT_BOOKINGS)
    }

    pub fn notifications(&self) -> Vec<NotificationRecord> {
        self.load_typed(KEY_ADMIN_NOTIFICATIONS)
    }

    /// Number of notifications not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.notifications().iter().filter(|n| !n.read).count()
    }

    pub fn badge(&self) -> NotificationBadge {
        NotificationBadge::from_count(self.unread_count())
    }

    fn load_typed<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.store
            .load_list(key)
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(key, index, error = %e, "Skipping unreadable stored entry");
                    None
                }
            })
            .collect()
    }
}

/// Millisecond creation time, bumped past the newest stored id so ids stay
/// unique when two bookings land in the same millisecond.
fn next_record_id(bookings: &[Value], now: Timestamp) -> RecordId {
    let candidate = now.timestamp_millis();
    let newest = bookings
        .iter()
        .filter_map(|b| b.get("id").and_then(Value::as_i64))
        .max();
    match newest {
        Some(newest) if newest >= candidate => newest.saturating_add(1),
        _ => candidate,
    }
}

fn to_value<T: Serialize>(item: &T) -> Option<Value> {
    match serde_json::to_value(item) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize record, not persisted");
            None
        }
    }
}
