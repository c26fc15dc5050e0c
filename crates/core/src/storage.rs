//! Key/list persistence seam.
//!
//! The booking core never touches a storage medium directly; it reads and
//! writes whole JSON lists through [`ListStore`]. Implementations treat the
//! medium as infallible from the caller's side: a missing or unreadable key
//! reads as an empty list, and write failures are logged by the backend.
//!
//! Read-modify-write cycles are not atomic. Two handles interleaving a load
//! and a save on the same key lose one of the updates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Full, append-ordered list of every booking.
pub const KEY_BOOKINGS: &str = "bookings";

/// Newest-first list of the most recent bookings.
pub const KEY_RECENT_BOOKINGS: &str = "recentBookings";

/// Admin notifications, one per booking.
pub const KEY_ADMIN_NOTIFICATIONS: &str = "adminNotifications";

pub trait ListStore {
    /// Load the list stored under `key`, or an empty list.
    fn load_list(&self, key: &str) -> Vec<Value>;

    /// Replace the list stored under `key`.
    fn save_list(&self, key: &str, records: &[Value]);
}

impl<S: ListStore + ?Sized> ListStore for &S {
    fn load_list(&self, key: &str) -> Vec<Value> {
        (**self).load_list(key)
    }

    fn save_list(&self, key: &str, records: &[Value]) {
        (**self).save_list(key, records)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store. Clones share the same map, so two clones behave like
/// two browser tabs over one local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lists: Arc<Mutex<HashMap<String, Vec<Value>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries under `key`.
    pub fn len(&self, key: &str) -> usize {
        self.load_list(key).len()
    }
}

impl ListStore for MemoryStore {
    fn load_list(&self, key: &str) -> Vec<Value> {
        match self.lists.lock() {
            Ok(lists) => lists.get(key).cloned().unwrap_or_default(),
            Err(_) => {
                tracing::warn!(key, "Memory store lock poisoned, reading empty list");
                Vec::new()
            }
        }
    }

    fn save_list(&self, key: &str, records: &[Value]) {
        match self.lists.lock() {
            Ok(mut lists) => {
                lists.insert(key.to_string(), records.to_vec());
            }
            Err(_) => tracing::error!(key, "Memory store lock poisoned, dropping write"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_key_reads_empty() {
        let store = MemoryStore::new();
        assert!(store.load_list(KEY_BOOKINGS).is_empty());
        assert_eq!(store.len(KEY_BOOKINGS), 0);
    }

    #[test]
    fn save_replaces_list() {
        let store = MemoryStore::new();
        store.save_list(KEY_BOOKINGS, &[json!(1), json!(2)]);
        store.save_list(KEY_BOOKINGS, &[json!(3)]);
        assert_eq!(store.load_list(KEY_BOOKINGS), vec![json!(3)]);
    }

    #[test]
    fn keys_are_independent() {
        let store = MemoryStore::new();
        store.save_list(KEY_BOOKINGS, &[json!("a")]);
        assert!(store.load_list(KEY_RECENT_BOOKINGS).is_empty());
    }

    #[test]
    fn clones_share_state() {
        let tab_a = MemoryStore::new();
        let tab_b = tab_a.clone();
        tab_a.save_list(KEY_ADMIN_NOTIFICATIONS, &[json!({"read": false})]);
        assert_eq!(tab_b.len(KEY_ADMIN_NOTIFICATIONS), 1);
    }

    #[test]
    fn reference_forwards_to_store() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.save_list(KEY_BOOKINGS, &[json!(1)]);
        assert_eq!(store.len(KEY_BOOKINGS), 1);
    }
}
