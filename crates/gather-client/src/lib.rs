//! # gather-client
//!
//! Typed events API client for the Gather backend.
//!
//! [`EventsClient`] maps every `/events` operation — listing with
//! composable filters, invitations, CRUD, invite, respond — onto typed
//! requests and responses, reading the bearer credential from the
//! session store at call time. Server rejections surface their `detail`
//! message (or a per-operation generic fallback) through [`ApiError`];
//! nothing is retried and nothing is fatal.

#![deny(unsafe_code)]

pub mod client;
pub mod errors;

pub use client::EventsClient;
pub use errors::ApiError;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
