//! Composable list-query filters.
//!
//! The server defines filter semantics (case-insensitive substring search
//! over title/description, inclusive date range, exact role match); the
//! client only forwards non-empty values and never interprets them.

use serde::{Deserialize, Serialize};

use crate::events::AttendeeRole;

/// Optional, composable filters for the event list endpoint.
///
/// An absent or empty field adds no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilters {
    /// Substring search over title and description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Inclusive lower bound on the event date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// Inclusive upper bound on the event date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// Restrict to events where the viewer has this role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AttendeeRole>,
}

impl EventFilters {
    /// Build the query pairs for the list request, skipping absent and
    /// empty values (an empty search box means "no constraint").
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(from) = self.date_from.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("date_from", from.to_string()));
        }
        if let Some(to) = self.date_to.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("date_to", to.to_string()));
        }
        if let Some(role) = self.role {
            let value = match role {
                AttendeeRole::Organizer => "organizer",
                AttendeeRole::Attendee => "attendee",
            };
            pairs.push(("role", value.to_string()));
        }
        pairs
    }

    /// True when no filter is set (the server returns its unfiltered list).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
