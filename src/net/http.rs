//! Authorized requests for protected resources.
//!
//! Every protected call attaches the stored access token as a bearer
//! credential. A 401-class failure gets one silent refresh round: on a
//! successful refresh the rotated pair is persisted and the call retried
//! once; on refresh failure both tokens are cleared and the original failure
//! is returned. Callers react to `ApiError::is_auth_failure` by running
//! `state::session::force_logout`, which is how an expired token tears the
//! session down outside the login/logout flow.

#![allow(clippy::unused_async)]

use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use crate::net::auth;
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::util::credentials;

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let mut req = gloo_net::http::Request::get(path);
    if let Some(token) = credentials::access_token() {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = req.send().await.map_err(|e| ApiError::network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::network(e.to_string()))?;
    auth::parse_response(status, &text)
}

/// GET a protected JSON resource with the refresh-then-teardown policy
/// described in the module docs.
pub async fn fetch_authorized_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let err = match get_json(path).await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !err.is_auth_failure() {
            return Err(err);
        }

        match auth::refresh_token().await {
            Ok(resp) => {
                if let Some(pair) = resp.credentials() {
                    credentials::save(&pair);
                }
                match get_json(path).await {
                    Err(retry_err) if retry_err.is_auth_failure() => {
                        credentials::clear();
                        Err(retry_err)
                    }
                    other => other,
                }
            }
            Err(refresh_err) => {
                // Refresh failure is infrastructural: log it, destroy the
                // pair, and surface the original auth failure.
                leptos::logging::warn!("token refresh failed (session ends): {refresh_err}");
                credentials::clear();
                Err(err)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::network("not available on server"))
    }
}
