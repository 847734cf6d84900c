//! Error taxonomy for backend calls and local form checks.
//!
//! Every failure a page can hit maps onto one variant so call sites can pick
//! the right presentation: toast the message, show inline field errors, or
//! offer a retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::validate::FieldErrors;

/// Shown when the backend gives no usable message of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Failure of a single backend call or of client-side validation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error. Check your connection and try again.")]
    Network(String),
    /// 401: the session is missing or expired.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    /// 403: the session is valid but the action is not permitted.
    #[error("{0}")]
    Forbidden(String),
    /// Client-side form checks failed; no request was sent.
    #[error("Please fix the highlighted fields.")]
    Validation(FieldErrors),
    /// Any other non-success status, carrying the backend's message.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Unexpected response from the server.")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP response.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = backend_message(body);
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(
                message.unwrap_or_else(|| "You are not allowed to do that.".to_owned()),
            ),
            _ => Self::Rejected {
                status,
                message: message.unwrap_or_else(|| GENERIC_FAILURE.to_owned()),
            },
        }
    }

    /// Only transport failures and server-side faults are worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::Unauthorized | Self::Forbidden(_) | Self::Validation(_) | Self::Decode(_) => false,
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Pull a human-readable message out of a JSON error body.
///
/// Looks at `message` first, then `error`. Plain-text bodies are used as-is
/// when short enough to show to a user.
fn backend_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return ["message", "error"]
            .iter()
            .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
            .map(str::trim)
            .find(|msg| !msg.is_empty())
            .map(str::to_owned);
    }
    if body.len() <= 200 && !body.starts_with('<') {
        return Some(body.to_owned());
    }
    None
}
