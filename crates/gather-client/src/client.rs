//! Events API client.
//!
//! Typed request/response mapping between UI intents and the remote
//! `/events` endpoints. The one cross-cutting concern: the current
//! bearer credential is read from the [`SessionStore`] at call time —
//! never cached at construction — so every request reflects the most
//! recent login/logout. A missing credential still sends the request;
//! the server is the sole authority on rejecting it.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::json;
use tracing::{debug, error, instrument};

use gather_core::{
    Event, EventDraft, EventFilters, EventId, EventPatch, RsvpStatus, detail_message,
};
use gather_session::SessionStore;

use crate::errors::ApiError;

/// Typed client for the events API.
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl EventsClient {
    /// Create a client against `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self::with_client(base_url, session, reqwest::Client::new())
    }

    /// Create a client with a shared HTTP client.
    #[must_use]
    pub fn with_client(
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
            session,
        }
    }

    /// Create a client using the configured API base URL.
    #[must_use]
    pub fn from_settings(session: Arc<SessionStore>) -> Self {
        let settings = gather_settings::get_settings();
        Self::new(settings.api.base_url.clone(), session)
    }

    /// Build request headers, attaching the bearer credential when one
    /// is present in the session store right now.
    fn build_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.token() {
            let value = format!("Bearer {token}");
            let _ = headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value).map_err(|e| ApiError::Auth {
                    message: format!("Invalid bearer token header: {e}"),
                })?,
            );
        }
        Ok(headers)
    }

    /// List events, forwarding only non-empty filter values.
    #[instrument(skip_all, fields(op = "list_events"))]
    pub async fn list_events(&self, filters: &EventFilters) -> Result<Vec<Event>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/events/", self.base_url))
            .headers(self.build_headers()?)
            .query(&filters.to_query_pairs())
            .send()
            .await?;
        let resp = check(resp, "list_events", "Failed to load events").await?;
        let events: Vec<Event> = resp.json().await?;
        debug!(count = events.len(), "events loaded");
        Ok(events)
    }

    /// List events organized by the current identity.
    #[instrument(skip_all, fields(op = "my_events"))]
    pub async fn my_events(&self) -> Result<Vec<Event>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/events/my-events", self.base_url))
            .headers(self.build_headers()?)
            .send()
            .await?;
        let resp = check(resp, "my_events", "Failed to load events").await?;
        Ok(resp.json().await?)
    }

    /// List events the current identity is invited to but does not
    /// organize.
    #[instrument(skip_all, fields(op = "invitations"))]
    pub async fn invitations(&self) -> Result<Vec<Event>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/events/invitations", self.base_url))
            .headers(self.build_headers()?)
            .send()
            .await?;
        let resp = check(resp, "invitations", "Failed to load invitations").await?;
        Ok(resp.json().await?)
    }

    /// Fetch a single event with its full attendee list.
    #[instrument(skip_all, fields(event_id = %id))]
    pub async fn get_event(&self, id: &EventId) -> Result<Event, ApiError> {
        let resp = self
            .http
            .get(format!("{}/events/{id}", self.base_url))
            .headers(self.build_headers()?)
            .send()
            .await?;
        let resp = check(resp, "get_event", "Failed to load event").await?;
        Ok(resp.json().await?)
    }

    /// Create an event. The server assigns id, organizer, the attendee
    /// seed, and timestamps.
    ///
    /// Pre-flight validation ([`gather_core::validate_event_draft`]) is
    /// the caller's gate; this method forwards the draft as-is.
    #[instrument(skip_all, fields(op = "create_event"))]
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        let resp = self
            .http
            .post(format!("{}/events/", self.base_url))
            .headers(self.build_headers()?)
            .json(draft)
            .send()
            .await?;
        let resp = check(resp, "create_event", "Failed to create event. Please try again.").await?;
        let event: Event = resp.json().await?;
        debug!(event_id = %event.id, "event created");
        Ok(event)
    }

    /// Update an event (organizer only). Absent patch fields are left
    /// unchanged by the server.
    #[instrument(skip_all, fields(event_id = %id))]
    pub async fn update_event(&self, id: &EventId, patch: &EventPatch) -> Result<Event, ApiError> {
        let resp = self
            .http
            .put(format!("{}/events/{id}", self.base_url))
            .headers(self.build_headers()?)
            .json(patch)
            .send()
            .await?;
        let resp = check(resp, "update_event", "Failed to update event").await?;
        Ok(resp.json().await?)
    }

    /// Delete an event (organizer only).
    ///
    /// Idempotent from the client's perspective: a second delete
    /// surfaces [`ApiError::NotFound`], which is terminal.
    #[instrument(skip_all, fields(event_id = %id))]
    pub async fn delete_event(&self, id: &EventId) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(format!("{}/events/{id}", self.base_url))
            .headers(self.build_headers()?)
            .send()
            .await?;
        let _ = check(resp, "delete_event", "Failed to delete event").await?;
        debug!(event_id = %id, "event deleted");
        Ok(())
    }

    /// Invite attendees by email (organizer only). New invitees are
    /// appended with status `pending`; already-attending emails are a
    /// server-defined no-op or conflict, with the server's message
    /// passed through either way.
    #[instrument(skip_all, fields(event_id = %id, count = emails.len()))]
    pub async fn invite(&self, id: &EventId, emails: &[String]) -> Result<Event, ApiError> {
        let resp = self
            .http
            .post(format!("{}/events/{id}/invite", self.base_url))
            .headers(self.build_headers()?)
            .json(&json!({ "emails": emails }))
            .send()
            .await?;
        let resp = check(resp, "invite", "Failed to send invitation").await?;
        Ok(resp.json().await?)
    }

    /// Respond to an invitation as the current identity.
    ///
    /// The server enforces the `going|maybe|not_going` response domain
    /// and refuses organizer status changes; its `detail` is surfaced
    /// unchanged.
    #[instrument(skip_all, fields(event_id = %id, status = status.as_str()))]
    pub async fn respond(&self, id: &EventId, status: RsvpStatus) -> Result<Event, ApiError> {
        let resp = self
            .http
            .post(format!("{}/events/{id}/respond", self.base_url))
            .headers(self.build_headers()?)
            .json(&json!({ "status": status }))
            .send()
            .await?;
        let resp = check(resp, "respond", "Failed to update response").await?;
        Ok(resp.json().await?)
    }
}

/// Map a non-success response to a typed error.
///
/// The body's `detail` (or the operation's generic fallback) becomes
/// the user-facing message; 404 maps to [`ApiError::NotFound`].
async fn check(
    resp: reqwest::Response,
    op: &'static str,
    fallback: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = detail_message(&text).unwrap_or_else(|| fallback.to_string());
    error!(status = status.as_u16(), op, %message, "events API error");
    metrics::counter!(
        "gather_api_failure_total",
        "op" => op,
        "status" => status.as_u16().to_string()
    )
    .increment(1);

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound { message });
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
