//! Auth error types.

/// Errors that can occur during authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// HTTP request failed (network unreachable, transport error, or an
    /// undecodable success body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the credentials or the request.
    ///
    /// `message` is the server's `detail` when present, otherwise the
    /// operation's generic fallback.
    #[error("auth rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// User-facing error message.
        message: String,
    },
}

impl AuthError {
    /// The user-facing message for form-level display.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display() {
        let err = AuthError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "auth rejected (401): Invalid credentials");
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn rejected_without_detail_keeps_fallback_text() {
        let err = AuthError::Rejected {
            status: 500,
            message: "Login failed. Please try again.".to_string(),
        };
        assert_eq!(err.message(), "Login failed. Please try again.");
    }
}
