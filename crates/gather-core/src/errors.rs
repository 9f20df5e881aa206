//! Server error-body parsing.
//!
//! The backend reports failures as JSON bodies with a `detail` field
//! (string, or a structured validation list). [`detail_message`] pulls
//! out a display-ready message; callers fall back to an
//! operation-specific generic message when it returns `None`.

use serde_json::Value;

/// Extract the `detail` message from an error response body.
///
/// Handles both shapes the backend produces:
/// - `{"detail": "Event not found"}` — plain string
/// - `{"detail": [{"msg": "...", ...}, ...]}` — request validation
///   errors, where the first entry's `msg` is used
///
/// Returns `None` for non-JSON bodies or bodies without a usable detail.
#[must_use]
pub fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
