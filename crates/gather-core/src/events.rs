//! Event wire types.
//!
//! These mirror the server's response and request schemas exactly.
//! `date` and `time` stay as the server's plain strings (`YYYY-MM-DD`,
//! `HH:MM`); only the audit timestamps are parsed as [`DateTime`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EventId;

/// Role of an attendee within an event.
///
/// Exactly one attendee per event has the `Organizer` role; the server
/// enforces this by seeding the attendee list with the creator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeRole {
    /// The event's creator. Always has status `going`.
    Organizer,
    /// An invited participant.
    Attendee,
}

/// An attendee's response to an invitation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    /// Invited, not yet responded. Initial status for new invitees.
    Pending,
    /// Confirmed attendance.
    Going,
    /// Tentative.
    Maybe,
    /// Declined.
    NotGoing,
}

impl RsvpStatus {
    /// Wire representation (`snake_case`), for query/body building.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Going => "going",
            Self::Maybe => "maybe",
            Self::NotGoing => "not_going",
        }
    }
}

/// A `(email, role, status)` tuple associated with an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Attendee's email address (identity key).
    pub email: String,
    /// Role within the event.
    pub role: AttendeeRole,
    /// Current invitation response.
    pub status: RsvpStatus,
}

/// A scheduled gathering as returned by the server.
///
/// `user_role` and `user_status` are computed server-side relative to
/// the requesting identity and are never sent by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Optional free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event date (`YYYY-MM-DD`).
    pub date: String,
    /// Event time (`HH:MM`).
    pub time: String,
    /// Event location.
    pub location: String,
    /// Email of the organizing attendee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,
    /// Full attendee list. Always contains at least the organizer.
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    /// Creation timestamp (server-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp (server-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Requesting identity's role, relative to this event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<AttendeeRole>,
    /// Requesting identity's invitation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<RsvpStatus>,
}

/// Payload for creating an event.
///
/// The server assigns id, organizer, attendee seed, and timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Event title (1..=200 chars server-side; 3+ chars client gate).
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event date (`YYYY-MM-DD`).
    pub date: String,
    /// Event time (`HH:MM`).
    pub time: String,
    /// Event location.
    pub location: String,
}

/// Partial update payload. `None` fields are omitted from the body and
/// left unchanged by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    /// New title, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New date, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// New time, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// New location, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rsvp_status_wire_names() {
        assert_eq!(serde_json::to_string(&RsvpStatus::NotGoing).unwrap(), r#""not_going""#);
        assert_eq!(serde_json::to_string(&RsvpStatus::Going).unwrap(), r#""going""#);
        assert_eq!(RsvpStatus::NotGoing.as_str(), "not_going");
    }

    #[test]
    fn attendee_role_wire_names() {
        assert_eq!(serde_json::to_string(&AttendeeRole::Organizer).unwrap(), r#""organizer""#);
        let role: AttendeeRole = serde_json::from_str(r#""attendee""#).unwrap();
        assert_eq!(role, AttendeeRole::Attendee);
    }

    #[test]
    fn event_decodes_server_shape() {
        let body = json!({
            "id": "68a1f2c3",
            "title": "Team offsite",
            "description": null,
            "date": "2026-09-10",
            "time": "14:00",
            "location": "Lisbon",
            "organizer_email": "a@b.com",
            "attendees": [
                {"email": "a@b.com", "role": "organizer", "status": "going"},
                {"email": "c@d.com", "role": "attendee", "status": "pending"}
            ],
            "created_at": "2026-08-30T10:00:00Z",
            "updated_at": "2026-08-30T10:00:00Z",
            "user_role": "organizer",
            "user_status": "going"
        });

        let event: Event = serde_json::from_value(body).unwrap();
        assert_eq!(event.id.as_str(), "68a1f2c3");
        assert_eq!(event.attendees.len(), 2);
        assert_eq!(event.attendees[1].status, RsvpStatus::Pending);
        assert_eq!(event.user_role, Some(AttendeeRole::Organizer));
        assert!(event.description.is_none());
    }

    #[test]
    fn event_decodes_without_optional_fields() {
        let body = json!({
            "id": "1",
            "title": "Minimal",
            "date": "2026-01-01",
            "time": "09:00",
            "location": "Online"
        });
        let event: Event = serde_json::from_value(body).unwrap();
        assert!(event.attendees.is_empty());
        assert!(event.created_at.is_none());
        assert!(event.user_status.is_none());
    }

    #[test]
    fn draft_omits_absent_description() {
        let draft = EventDraft {
            title: "Picnic".into(),
            description: None,
            date: "2026-09-01".into(),
            time: "12:00".into(),
            location: "Park".into(),
        };
        let v = serde_json::to_value(&draft).unwrap();
        assert!(v.get("description").is_none());
        assert_eq!(v["title"], "Picnic");
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = EventPatch {
            location: Some("Moved venue".into()),
            ..EventPatch::default()
        };
        let v = serde_json::to_value(&patch).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["location"], "Moved venue");
    }

    #[test]
    fn empty_patch_is_empty_object() {
        let v = serde_json::to_value(EventPatch::default()).unwrap();
        assert!(v.as_object().unwrap().is_empty());
    }

    #[test]
    fn attendee_organizer_invariant_shape() {
        // The server seeds every event with its organizer as the first
        // attendee; decoding such a list keeps role/status pairing intact.
        let list: Vec<Attendee> = serde_json::from_value(json!([
            {"email": "org@x.com", "role": "organizer", "status": "going"}
        ]))
        .unwrap();
        assert_eq!(list[0].role, AttendeeRole::Organizer);
        assert_eq!(list[0].status, RsvpStatus::Going);
    }
}
