//! # gather-session
//!
//! Persisted session store and auth operations for the Gather client.
//!
//! The [`SessionStore`] is the single source of truth for "is this
//! client authenticated, and as whom":
//!
//! - **Persistence**: two fixed keys behind the [`CredentialStore`]
//!   trait — file-backed with 0o600 permissions, or in-memory for
//!   environments without durable storage
//! - **Reactivity**: auth changes fan out as [`SessionEvent`]s over a
//!   broadcast channel; `logout` emits a navigation intent instead of
//!   routing
//! - **Auth operations**: `signup`, `login` (form-encoded password
//!   grant), and synchronous, idempotent `logout`

#![deny(unsafe_code)]

pub mod emitter;
pub mod errors;
pub mod storage;
pub mod store;

pub use emitter::{SessionEmitter, SessionEvent};
pub use errors::AuthError;
pub use storage::{
    CredentialStore, EMAIL_KEY, FileCredentialStore, MemoryCredentialStore, TOKEN_KEY,
};
pub use store::SessionStore;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
