//! Session operations: the single writer of the auth state machine.
//!
//! DESIGN
//! ======
//! Each operation is an async task that dispatches reducer actions around the
//! API calls in `net::auth`. Transitions from one operation are applied in
//! order (loading, then success or error); two racing operations resolve
//! last-writer-wins, so forms disable their submit control while
//! `is_loading` is set.
//!
//! User-initiated operations surface failures three ways: the shared `error`
//! field, an error toast, and a re-raised `Err` for the call site.
//! Infrastructural paths (startup check, remote logout) log and degrade
//! silently to logged-out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth as api;
use crate::net::error::ApiError;
use crate::state::auth::{AuthAction, AuthState, reduce};
use crate::state::toast::ToastState;
use crate::util::credentials;

fn dispatch(auth: RwSignal<AuthState>, action: AuthAction) {
    auth.update(|state| reduce(state, action));
}

/// Resolve the session once at startup.
///
/// No stored access token means logged-out without a network call. A stored
/// token is validated against `/auth/me`; a rejected token is cleared and
/// degrades silently to logged-out — the user only ever sees the resulting
/// sign-in redirect, never an error.
pub async fn check_auth(auth: RwSignal<AuthState>) {
    if credentials::access_token().is_none() {
        dispatch(auth, AuthAction::Logout);
        return;
    }

    dispatch(auth, AuthAction::Loading);
    match api::get_current_user().await {
        Ok(user) => dispatch(auth, AuthAction::Success(user)),
        Err(err) => {
            leptos::logging::warn!("startup auth check failed (degrading to logged-out): {err}");
            credentials::clear();
            dispatch(auth, AuthAction::Logout);
        }
    }
}

/// Sign in with email and password.
///
/// Tokens are persisted before the success transition so consumers reacting
/// to `is_authenticated` can immediately read a valid bearer token.
///
/// # Errors
///
/// Re-raises the mapped [`ApiError`] after recording it in the state and
/// toasting it, so call-site `await` chains can stop their own flow.
pub async fn login(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    dispatch(auth, AuthAction::Loading);
    match api::login(email, password).await {
        Ok(resp) => {
            let Some(pair) = resp.credentials() else {
                let err = ApiError::network("login response carried no tokens");
                dispatch(auth, AuthAction::Error(err.message.clone()));
                toasts.update(|t| {
                    t.error(err.message.clone());
                });
                return Err(err);
            };
            credentials::save(&pair);
            let username = resp.user.username.clone();
            dispatch(auth, AuthAction::Success(resp.user));
            toasts.update(|t| {
                t.success(format!("Welcome back, {username}!"));
            });
            Ok(())
        }
        Err(err) => {
            dispatch(auth, AuthAction::Error(err.message.clone()));
            toasts.update(|t| {
                t.error(err.message.clone());
            });
            Err(err)
        }
    }
}

/// Create an account.
///
/// A backend that returns tokens signs the user straight in; one that does
/// not resolves to logged-out with a success toast pointing at the sign-in
/// form.
///
/// # Errors
///
/// Same triple surfacing as [`login`].
pub async fn register(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    dispatch(auth, AuthAction::Loading);
    match api::register(username, email, password).await {
        Ok(resp) => {
            if let Some(pair) = resp.credentials() {
                credentials::save(&pair);
                let username = resp.user.username.clone();
                dispatch(auth, AuthAction::Success(resp.user));
                toasts.update(|t| {
                    t.success(format!("Welcome, {username}!"));
                });
            } else {
                dispatch(auth, AuthAction::Logout);
                toasts.update(|t| {
                    t.success("Account created. Please sign in.");
                });
            }
            Ok(())
        }
        Err(err) => {
            dispatch(auth, AuthAction::Error(err.message.clone()));
            toasts.update(|t| {
                t.error(err.message.clone());
            });
            Err(err)
        }
    }
}

/// Sign out.
///
/// The remote call is best-effort and swallows its own failures; the local
/// teardown below it runs unconditionally, so the session always ends even
/// with the server unreachable.
pub async fn logout(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    api::logout().await;

    credentials::clear();
    dispatch(auth, AuthAction::Logout);
    toasts.update(|t| {
        t.info("Signed out.");
    });
}

/// Drop the trailing error message. Safe to call at any time.
pub fn clear_error(auth: RwSignal<AuthState>) {
    dispatch(auth, AuthAction::ClearError);
}

/// Named teardown path for protected-resource callers that hit an
/// unrecoverable 401: clear both tokens and resolve to logged-out without
/// surfacing an error. The guard then redirects to sign-in.
pub fn force_logout(auth: RwSignal<AuthState>) {
    credentials::clear();
    dispatch(auth, AuthAction::Logout);
}

/// Change the signed-in user's password. Not a state-machine transition.
///
/// # Errors
///
/// Toasts and re-raises the mapped error.
pub async fn change_password(
    toasts: RwSignal<ToastState>,
    current_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    match api::change_password(current_password, new_password).await {
        Ok(()) => {
            toasts.update(|t| {
                t.success("Password updated.");
            });
            Ok(())
        }
        Err(err) => {
            toasts.update(|t| {
                t.error(err.message.clone());
            });
            Err(err)
        }
    }
}

/// Request a password reset email. Not a state-machine transition.
///
/// # Errors
///
/// Toasts and re-raises the mapped error.
pub async fn request_password_reset(
    toasts: RwSignal<ToastState>,
    email: &str,
) -> Result<(), ApiError> {
    match api::request_password_reset(email).await {
        Ok(()) => {
            toasts.update(|t| {
                t.success("If that address exists, a reset email is on its way.");
            });
            Ok(())
        }
        Err(err) => {
            toasts.update(|t| {
                t.error(err.message.clone());
            });
            Err(err)
        }
    }
}

/// Complete a password reset with an emailed token. Not a state-machine
/// transition.
///
/// # Errors
///
/// Toasts and re-raises the mapped error.
pub async fn reset_password(
    toasts: RwSignal<ToastState>,
    token: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    match api::reset_password(token, new_password).await {
        Ok(()) => {
            toasts.update(|t| {
                t.success("Password reset. Please sign in.");
            });
            Ok(())
        }
        Err(err) => {
            toasts.update(|t| {
                t.error(err.message.clone());
            });
            Err(err)
        }
    }
}
