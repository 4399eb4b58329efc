//! Session error type and message normalization.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response is parsed against the server's `{"error": {...}}`
//! envelope. A body that does not conform is reported as a plain network
//! failure. Known failure kinds get a stable, user-presentable message;
//! unmapped server messages pass through verbatim on the assumption they are
//! already presentable, with a generic fallback when there is nothing to show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use crate::net::types::ErrorEnvelope;

/// Failure classification for session and protected-resource calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCredentials,
    EmailExists,
    Validation,
    Unauthorized,
    TokenExpired,
    NoRefreshToken,
    NotFound,
    Server,
    Timeout,
    Network,
    Unknown,
}

/// A normalized API failure.
///
/// `message` is always presentable to the user; the raw transport string is
/// replaced during construction. `status`, `code`, and `details` survive for
/// diagnostics and field-level form handling.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub code: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// An unreachable-server / unparsable-response failure.
    ///
    /// The raw transport detail never reaches the user-facing `message`, but
    /// it survives in `details` so swallowed-path logs keep the cause.
    pub fn network(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            kind: ErrorKind::Network,
            message: friendly_message(ErrorKind::Network, &detail),
            status: None,
            code: None,
            details: (!detail.is_empty()).then(|| serde_json::Value::String(detail)),
        }
    }

    /// Refresh was requested with no stored refresh token. No network call
    /// is made for this case.
    pub fn no_refresh_token() -> Self {
        Self {
            kind: ErrorKind::NoRefreshToken,
            message: friendly_message(ErrorKind::NoRefreshToken, ""),
            status: None,
            code: None,
            details: None,
        }
    }

    /// True for failures that should tear the session down (expired or
    /// rejected credentials on an authenticated call).
    ///
    /// A 401 counts even when the body was not the structured envelope — a
    /// proxy's bare 401 page still means the credentials were refused.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Unauthorized | ErrorKind::TokenExpired | ErrorKind::NoRefreshToken
        ) || self.status == Some(401)
    }
}

impl fmt::Display for ApiError {
    /// Log form: the presentable message plus the diagnostic detail. The UI
    /// reads `message` directly and never sees the detail.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({details})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Build an [`ApiError`] from a non-2xx response.
///
/// The body must match the `{"error": {"code", "message", "details?"}}`
/// envelope exactly; anything else is reported as a network failure.
pub fn parse_error_body(status: u16, body: &str) -> ApiError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return ApiError {
            kind: ErrorKind::Network,
            message: friendly_message(ErrorKind::Network, ""),
            status: Some(status),
            code: None,
            details: None,
        };
    };

    let kind = classify(status, &envelope.error.code);
    ApiError {
        kind,
        message: friendly_message(kind, &envelope.error.message),
        status: Some(status),
        code: Some(envelope.error.code),
        details: envelope.error.details,
    }
}

/// Map a machine-readable code (preferred) or transport status to a kind.
fn classify(status: u16, code: &str) -> ErrorKind {
    match code {
        "INVALID_CREDENTIALS" => ErrorKind::InvalidCredentials,
        "EMAIL_EXISTS" => ErrorKind::EmailExists,
        "VALIDATION_ERROR" => ErrorKind::Validation,
        "TOKEN_EXPIRED" => ErrorKind::TokenExpired,
        "UNAUTHORIZED" => ErrorKind::Unauthorized,
        "NOT_FOUND" => ErrorKind::NotFound,
        "TIMEOUT" => ErrorKind::Timeout,
        _ => match status {
            401 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::Timeout,
            422 => ErrorKind::Validation,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Unknown,
        },
    }
}

/// The message-friendliness table: known kinds get a stable string, unknown
/// kinds pass the server's message through, and an empty message falls back
/// to a generic string.
pub fn friendly_message(kind: ErrorKind, raw: &str) -> String {
    match kind {
        ErrorKind::InvalidCredentials => "Incorrect email or password.".to_owned(),
        ErrorKind::EmailExists => "An account with this email already exists.".to_owned(),
        ErrorKind::Validation => {
            if raw.is_empty() {
                "Some fields are invalid. Please check your input.".to_owned()
            } else {
                raw.to_owned()
            }
        }
        ErrorKind::Unauthorized => "You are not signed in. Please sign in again.".to_owned(),
        ErrorKind::TokenExpired | ErrorKind::NoRefreshToken => {
            "Your session has expired. Please sign in again.".to_owned()
        }
        ErrorKind::NotFound => "The requested resource was not found.".to_owned(),
        ErrorKind::Server => "The server hit an internal error. Please try again later.".to_owned(),
        ErrorKind::Timeout => "The request timed out. Please try again.".to_owned(),
        ErrorKind::Network => "Could not reach the server. Check your connection.".to_owned(),
        ErrorKind::Unknown => {
            if raw.is_empty() {
                "Something went wrong. Please try again.".to_owned()
            } else {
                raw.to_owned()
            }
        }
    }
}
