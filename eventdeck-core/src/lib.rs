//! Core types for the eventdeck ecosystem.
//!
//! This crate provides the pieces shared by every eventdeck frontend:
//! - `Event` and `EventDraft` for event records
//! - `filter` module for computing the visible subset of a listing
//! - `validate` module for turning raw form input into submittable records
//! - `error` module for the store error taxonomy

pub mod error;
pub mod event;
pub mod filter;
pub mod validate;

// Re-export the record types at crate root for convenience
pub use event::*;
