//! Wire types shared with the server. Field names are camelCase on the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::credentials::CredentialPair;

/// The authenticated user's identity record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response body for login, register, and refresh.
///
/// Tokens are optional because some deployments register an account without
/// starting a session; callers that require tokens check `credentials()`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

impl AuthResponse {
    /// Extract the token pair, if the server issued one.
    pub fn credentials(&self) -> Option<CredentialPair> {
        Some(CredentialPair {
            access_token: self.access_token.clone()?,
            refresh_token: self.refresh_token.clone()?,
        })
    }
}

/// Response body for `GET /auth/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// The server's structured error envelope: `{"error": {...}}`.
///
/// Anything that does not parse into this exact shape is treated as an
/// unparsable network failure.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// The inner error record of [`ErrorEnvelope`].
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
