//! Booking core for the Lumière Studio website.
//!
//! The wizard runs over an explicit [`draft::BookingDraft`], reports
//! rendering work through the [`wizard::View`] trait and persists finished
//! bookings through the [`storage::ListStore`] trait. No module touches a
//! page or a storage medium directly.

pub mod booking_store;
pub mod config;
pub mod draft;
pub mod error;
pub mod package;
pub mod payment;
pub mod records;
pub mod storage;
pub mod summary;
pub mod types;
pub mod validation;
pub mod wizard;
