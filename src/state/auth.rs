//! Session state machine: the auth record and its transition function.
//!
//! The record collapses five conceptual states (unresolved, loading,
//! authenticated, unauthenticated, failed) into four fields, where loading
//! and a trailing error are modifiers over the authenticated/unauthenticated
//! split. Every transition replaces its fields in one synchronous update, so
//! readers never observe a half-applied state across an await point.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, loading status, and the
/// last operation failure.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    /// The machine starts loading and unresolved: guards must not redirect
    /// until the startup check dispatches its first resolving action.
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }
}

impl AuthState {
    /// True once the startup check (or any later operation) has resolved.
    pub fn resolved(&self) -> bool {
        !self.is_loading
    }
}

/// Legal transitions of the session state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    /// An operation entered flight. Idempotent while already loading.
    Loading,
    /// An operation resolved with an authenticated user.
    Success(User),
    /// A user-initiated operation failed with a presentable message.
    Error(String),
    /// Resolved to logged-out: explicit logout, missing credentials, or a
    /// silently-degraded startup/refresh failure.
    Logout,
    /// Drop the trailing error, leaving everything else untouched.
    ClearError,
}

/// Apply one transition. The only mutation path for [`AuthState`].
pub fn reduce(state: &mut AuthState, action: AuthAction) {
    match action {
        AuthAction::Loading => {
            state.is_loading = true;
            state.error = None;
        }
        AuthAction::Success(user) => {
            state.user = Some(user);
            state.is_authenticated = true;
            state.is_loading = false;
            state.error = None;
        }
        AuthAction::Error(message) => {
            state.user = None;
            state.is_authenticated = false;
            state.is_loading = false;
            state.error = Some(message);
        }
        AuthAction::Logout => {
            state.user = None;
            state.is_authenticated = false;
            state.is_loading = false;
            state.error = None;
        }
        AuthAction::ClearError => {
            state.error = None;
        }
    }
}
