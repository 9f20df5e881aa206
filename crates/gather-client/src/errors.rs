//! Events API error types.

/// Errors surfaced by the events client.
///
/// Authorization, conflict, and validation rejections all arrive as
/// [`ApiError::Api`] with the server's `detail` (or a per-operation
/// generic fallback) as the message; the UI displays them inline and no
/// state is mutated. Nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network unreachable, transport error, or an
    /// undecodable success body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// User-facing error message.
        message: String,
    },

    /// The requested event does not exist (terminal, not retried).
    #[error("not found: {message}")]
    NotFound {
        /// User-facing error message.
        message: String,
    },

    /// The stored credential cannot be used as a header value.
    #[error("auth header error: {message}")]
    Auth {
        /// Error description.
        message: String,
    },
}

impl ApiError {
    /// The user-facing message for inline or modal display.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::NotFound { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
