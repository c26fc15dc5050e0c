//! `lumiere-console` library crate.
//!
//! Re-exports the terminal view and command loop for integration testing.
//! The binary entrypoint lives in `main.rs`.

pub mod command;
pub mod session;
pub mod terminal;
