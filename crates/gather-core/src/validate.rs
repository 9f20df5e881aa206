//! Pre-flight form validation gates.
//!
//! Pure, synchronous predicate checks applied before any network call.
//! A failed gate surfaces immediately as a form-level message and the
//! request is never sent. The `Display` of each variant is the exact
//! user-facing message.

use thiserror::Error;

use crate::events::EventDraft;

/// Minimum title length for event creation.
const MIN_TITLE_LEN: usize = 3;

/// Minimum password length for signup.
const MIN_PASSWORD_LEN: usize = 6;

/// A failed pre-flight check. Detected locally, no network round trip.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title missing or whitespace-only.
    #[error("Event title is required")]
    TitleRequired,
    /// Title shorter than the minimum after trimming.
    #[error("Event title must be at least 3 characters")]
    TitleTooShort,
    /// Date missing.
    #[error("Event date is required")]
    DateRequired,
    /// Time missing.
    #[error("Event time is required")]
    TimeRequired,
    /// Location missing or whitespace-only.
    #[error("Event location is required")]
    LocationRequired,
    /// A signup/login field was left empty.
    #[error("Please fill in all fields")]
    FieldsMissing,
    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Password shorter than the minimum.
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Validate an event draft before invoking the events client.
///
/// Checks run in form order and the first failure wins, matching the
/// one-message-at-a-time behavior of the creation form.
pub fn validate_event_draft(draft: &EventDraft) -> Result<(), ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(ValidationError::TitleTooShort);
    }
    if draft.date.is_empty() {
        return Err(ValidationError::DateRequired);
    }
    if draft.time.is_empty() {
        return Err(ValidationError::TimeRequired);
    }
    if draft.location.trim().is_empty() {
        return Err(ValidationError::LocationRequired);
    }
    Ok(())
}

/// Validate signup form input before calling the session store.
pub fn validate_signup(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationError::FieldsMissing);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate login form input.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::FieldsMissing);
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> EventDraft {
        EventDraft {
            title: "abc".into(),
            description: None,
            date: "2026-09-10".into(),
            time: "14:00".into(),
            location: "Lisbon".into(),
        }
    }

    // ── Event draft ─────────────────────────────────────────────────────

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate_event_draft(&valid_draft()), Ok(()));
    }

    #[test]
    fn empty_title_is_required() {
        let draft = EventDraft {
            title: "   ".into(),
            ..valid_draft()
        };
        assert_eq!(validate_event_draft(&draft), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn two_char_title_rejected_with_message() {
        let draft = EventDraft {
            title: "ab".into(),
            ..valid_draft()
        };
        let err = validate_event_draft(&draft).unwrap_err();
        assert_eq!(err, ValidationError::TitleTooShort);
        assert!(err.to_string().contains("at least 3 characters"));
    }

    #[test]
    fn three_char_title_accepted() {
        let draft = EventDraft {
            title: "abc".into(),
            ..valid_draft()
        };
        assert!(validate_event_draft(&draft).is_ok());
    }

    #[test]
    fn title_trimmed_before_length_check() {
        let draft = EventDraft {
            title: "  ab  ".into(),
            ..valid_draft()
        };
        assert_eq!(validate_event_draft(&draft), Err(ValidationError::TitleTooShort));
    }

    #[test]
    fn missing_date_rejected() {
        let draft = EventDraft {
            date: String::new(),
            ..valid_draft()
        };
        assert_eq!(validate_event_draft(&draft), Err(ValidationError::DateRequired));
    }

    #[test]
    fn missing_time_rejected() {
        let draft = EventDraft {
            time: String::new(),
            ..valid_draft()
        };
        assert_eq!(validate_event_draft(&draft), Err(ValidationError::TimeRequired));
    }

    #[test]
    fn whitespace_location_rejected() {
        let draft = EventDraft {
            location: "  ".into(),
            ..valid_draft()
        };
        assert_eq!(
            validate_event_draft(&draft),
            Err(ValidationError::LocationRequired)
        );
    }

    #[test]
    fn first_failure_wins() {
        // Empty title and empty date: title message is reported.
        let draft = EventDraft {
            title: String::new(),
            date: String::new(),
            ..valid_draft()
        };
        assert_eq!(validate_event_draft(&draft), Err(ValidationError::TitleRequired));
    }

    // ── Signup ──────────────────────────────────────────────────────────

    #[test]
    fn valid_signup_passes() {
        assert!(validate_signup("a@b.com", "secret1", "secret1").is_ok());
    }

    #[test]
    fn signup_requires_all_fields() {
        assert_eq!(
            validate_signup("a@b.com", "", ""),
            Err(ValidationError::FieldsMissing)
        );
    }

    #[test]
    fn signup_password_mismatch() {
        assert_eq!(
            validate_signup("a@b.com", "secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn signup_short_password_rejected() {
        let err = validate_signup("a@b.com", "12345", "12345").unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooShort);
        assert!(err.to_string().contains("at least 6 characters"));
    }

    #[test]
    fn signup_six_char_password_accepted() {
        assert!(validate_signup("a@b.com", "123456", "123456").is_ok());
    }

    // ── Login ───────────────────────────────────────────────────────────

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(validate_login("a@b.com", ""), Err(ValidationError::FieldsMissing));
        assert_eq!(validate_login("", "pw"), Err(ValidationError::FieldsMissing));
        assert!(validate_login("a@b.com", "pw").is_ok());
    }
}
