//! Session API client for the `/auth/*` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since sessions are
//! only established in the browser.
//!
//! Responses are read as text and fed through pure parse helpers so the
//! status/body handling is testable without a browser. Every non-2xx body is
//! matched against the server's error envelope by [`error::parse_error_body`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::de::DeserializeOwned;

use crate::net::error::{self, ApiError};
#[cfg(feature = "hydrate")]
use crate::net::types::MeResponse;
use crate::net::types::{AuthResponse, User};
use crate::util::credentials;

/// Interpret a JSON response: 2xx parses into `T`, anything else is a
/// normalized [`ApiError`].
pub fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        serde_json::from_str(body).map_err(|e| ApiError::network(e.to_string()))
    } else {
        Err(error::parse_error_body(status, body))
    }
}

/// Interpret an empty-body response: 2xx is success, anything else is a
/// normalized [`ApiError`].
pub fn parse_empty(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error::parse_error_body(status, body))
    }
}

#[cfg(feature = "hydrate")]
fn with_bearer(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match credentials::access_token() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

#[cfg(feature = "hydrate")]
async fn send_json<T: DeserializeOwned>(
    req: gloo_net::http::RequestBuilder,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    let resp = req
        .json(body)
        .map_err(|e| ApiError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::network(e.to_string()))?;
    parse_response(status, &text)
}

#[cfg(feature = "hydrate")]
async fn send_json_empty(
    req: gloo_net::http::RequestBuilder,
    body: &serde_json::Value,
) -> Result<(), ApiError> {
    let resp = req
        .json(body)
        .map_err(|e| ApiError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::network(e.to_string()))?;
    parse_empty(status, &text)
}

/// `POST /auth/login` — exchange credentials for a token pair and user.
///
/// # Errors
///
/// `InvalidCredentials` on a 401 envelope, `Network` when the server is
/// unreachable or the body is unparsable.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({"email": email, "password": password});
        send_json(gloo_net::http::Request::post("/auth/login"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::network("not available on server"))
    }
}

/// `POST /auth/register` — create an account.
///
/// The response may or may not carry tokens; callers decide between
/// auto-login and a manual sign-in prompt via `AuthResponse::credentials`.
pub async fn register(username: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        send_json(gloo_net::http::Request::post("/auth/register"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(ApiError::network("not available on server"))
    }
}

/// `GET /auth/me` — fetch the user behind the stored access token.
///
/// The request goes out even with no stored token; the server's 401 then
/// resolves the startup check to logged-out.
pub async fn get_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get("/auth/me"))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::network(e.to_string()))?;
        parse_response::<MeResponse>(status, &text).map(|me| me.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::network("not available on server"))
    }
}

/// `POST /auth/refresh` — trade the stored refresh token for a new pair.
///
/// # Errors
///
/// `NoRefreshToken` immediately (no network call) when the store is empty.
pub async fn refresh_token() -> Result<AuthResponse, ApiError> {
    let Some(token) = credentials::refresh_token() else {
        return Err(ApiError::no_refresh_token());
    };
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({"refreshToken": token});
        send_json(gloo_net::http::Request::post("/auth/refresh"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::network("not available on server"))
    }
}

/// `POST /auth/logout` — best-effort remote invalidation.
///
/// Failures are logged and swallowed: local teardown must not depend on the
/// server being reachable.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({"refreshToken": credentials::refresh_token()});
        if let Err(err) =
            send_json_empty(with_bearer(gloo_net::http::Request::post("/auth/logout")), &body).await
        {
            leptos::logging::warn!("remote logout failed (ignored): {err}");
        }
    }
}

/// `PUT /auth/change-password` — authenticated password change.
pub async fn change_password(current_password: &str, new_password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        send_json_empty(with_bearer(gloo_net::http::Request::put("/auth/change-password")), &body)
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current_password, new_password);
        Err(ApiError::network("not available on server"))
    }
}

/// `POST /auth/forgot-password` — request a reset email.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({"email": email});
        send_json_empty(gloo_net::http::Request::post("/auth/forgot-password"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::network("not available on server"))
    }
}

/// `POST /auth/reset-password` — complete a reset with an emailed token.
pub async fn reset_password(token: &str, new_password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({"token": token, "newPassword": new_password});
        send_json_empty(gloo_net::http::Request::post("/auth/reset-password"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, new_password);
        Err(ApiError::network("not available on server"))
    }
}
