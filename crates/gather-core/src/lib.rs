//! # gather-core
//!
//! Foundation types and utilities for the Gather event-management client.
//!
//! This crate provides the shared vocabulary the session and client crates
//! depend on:
//!
//! - **Branded IDs**: [`ids::EventId`] as a newtype over the server string
//! - **Wire types**: [`events::Event`], [`events::Attendee`], the
//!   [`events::EventDraft`]/[`events::EventPatch`] request payloads
//! - **Filters**: [`filters::EventFilters`] for composable list queries
//! - **Validation gates**: [`validate`] pre-flight form checks
//! - **Error bodies**: [`errors::detail_message`] for FastAPI-style
//!   `{"detail": ...}` responses
//! - **Logging**: [`logging::init_subscriber`]
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `gather-session` and `gather-client`.

#![deny(unsafe_code)]

pub mod errors;
pub mod events;
pub mod filters;
pub mod ids;
pub mod logging;
pub mod validate;

pub use errors::detail_message;
pub use events::{Attendee, AttendeeRole, Event, EventDraft, EventPatch, RsvpStatus};
pub use filters::EventFilters;
pub use ids::EventId;
pub use validate::{ValidationError, validate_event_draft, validate_login, validate_signup};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _id = EventId::from("abc");
        let _filters = EventFilters::default();
        let _status = RsvpStatus::Pending;
    }
}
