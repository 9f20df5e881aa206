//! The session store: single source of truth for "is this client
//! authenticated, and as whom".
//!
//! State is hydrated from the injected [`CredentialStore`] at
//! construction, mutated only by `login` and `logout`, and always keeps
//! the invariant `is_authenticated() ⟺ token present`. Both persisted
//! values are written and cleared together in one synchronous section.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use gather_core::detail_message;

use crate::emitter::{SessionEvent, SessionEmitter};
use crate::errors::AuthError;
use crate::storage::{CredentialStore, EMAIL_KEY, TOKEN_KEY};

/// Generic fallback when a login rejection carries no `detail`.
const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

/// Generic fallback when a signup rejection carries no `detail`.
const SIGNUP_FALLBACK: &str = "Signup failed. Please try again.";

/// Login endpoint response body (`token_type` is always `bearer` and
/// ignored).
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Signup endpoint response body (the human-readable `message` is
/// ignored).
#[derive(Debug, Deserialize)]
struct SignupResponse {
    id: String,
}

/// In-memory session state. Token and email are set and cleared
/// together, never partially.
#[derive(Clone, Debug, Default)]
struct SessionState {
    token: Option<String>,
    email: Option<String>,
}

/// Client-side record of authentication status and identity.
pub struct SessionStore {
    http: reqwest::Client,
    base_url: String,
    storage: Arc<dyn CredentialStore>,
    state: RwLock<SessionState>,
    emitter: SessionEmitter,
}

impl SessionStore {
    /// Create a session store against `base_url`, hydrating state from
    /// the injected credential store.
    #[must_use]
    pub fn new(base_url: impl Into<String>, storage: Arc<dyn CredentialStore>) -> Self {
        Self::with_client(base_url, storage, reqwest::Client::new())
    }

    /// Create a session store with a shared HTTP client.
    #[must_use]
    pub fn with_client(
        base_url: impl Into<String>,
        storage: Arc<dyn CredentialStore>,
        client: reqwest::Client,
    ) -> Self {
        let state = SessionState {
            token: storage.get(TOKEN_KEY),
            email: storage.get(EMAIL_KEY),
        };
        if state.token.is_some() {
            debug!("session hydrated from persisted credentials");
        }
        Self {
            http: client,
            base_url: base_url.into(),
            storage,
            state: RwLock::new(state),
            emitter: SessionEmitter::new(),
        }
    }

    /// Register a new identity.
    ///
    /// Does not authenticate the session; the caller must separately
    /// log in. Returns the server-assigned user id.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn signup(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let resp = self
            .http
            .post(format!("{}/auth/signup", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = detail_message(&text).unwrap_or_else(|| SIGNUP_FALLBACK.to_string());
            warn!(status = status.as_u16(), "signup rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let data: SignupResponse = resp.json().await?;
        debug!(id = %data.id, "signup succeeded");
        Ok(data.id)
    }

    /// Authenticate with the server and persist the issued credential.
    ///
    /// On success both persisted values are written and the in-memory
    /// state flipped in the same synchronous section, then
    /// [`SessionEvent::AuthChanged`] is emitted. On failure prior state
    /// is left untouched and the server's message (or a generic
    /// fallback) is surfaced. Never retried. With concurrent logins the
    /// last response to resolve wins.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        // The auth endpoint takes OAuth2 password-grant form fields.
        let form = [("username", email), ("password", password)];

        let resp = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = detail_message(&text).unwrap_or_else(|| LOGIN_FALLBACK.to_string());
            warn!(status = status.as_u16(), "login rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let data: LoginResponse = resp.json().await?;

        // Persist and flip state together; both keys or neither.
        self.storage.set(TOKEN_KEY, &data.access_token);
        self.storage.set(EMAIL_KEY, email);
        {
            let mut state = self.state.write();
            state.token = Some(data.access_token);
            state.email = Some(email.to_string());
        }
        let _ = self
            .emitter
            .emit(SessionEvent::AuthChanged { authenticated: true });
        debug!("login succeeded");
        Ok(())
    }

    /// Clear the session unconditionally.
    ///
    /// Synchronous, idempotent, no server round trip. Removes both
    /// persisted values, clears in-memory state, and emits
    /// [`SessionEvent::AuthChanged`] then
    /// [`SessionEvent::NavigateToLogin`]. In-flight requests complete
    /// with whatever credential they captured at send time.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(EMAIL_KEY);
        {
            let mut state = self.state.write();
            state.token = None;
            state.email = None;
        }
        let _ = self
            .emitter
            .emit(SessionEvent::AuthChanged { authenticated: false });
        let _ = self.emitter.emit(SessionEvent::NavigateToLogin);
        debug!("session cleared");
    }

    /// Current bearer credential. Pure read, never fetches.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Current identity hint (email). Pure read.
    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.state.read().email.clone()
    }

    /// Whether a credential is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    /// Subscribe to session change events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SessionEvent> {
        self.emitter.subscribe()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
