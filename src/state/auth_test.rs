use super::*;

fn user(name: &str) -> User {
    User {
        id: 1,
        username: name.to_owned(),
        email: format!("{name}@example.com"),
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_is_loading_and_unresolved() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(state.is_loading);
    assert!(state.error.is_none());
    assert!(!state.resolved());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn loading_sets_flag_and_clears_error() {
    let mut state = AuthState {
        error: Some("old failure".to_owned()),
        is_loading: false,
        ..AuthState::default()
    };
    reduce(&mut state, AuthAction::Loading);
    assert!(state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn loading_is_idempotent() {
    let mut state = AuthState::default();
    reduce(&mut state, AuthAction::Loading);
    let snapshot = state.clone();
    reduce(&mut state, AuthAction::Loading);
    assert_eq!(state, snapshot);
}

#[test]
fn success_populates_user_and_resolves() {
    let mut state = AuthState::default();
    reduce(&mut state, AuthAction::Loading);
    reduce(&mut state, AuthAction::Success(user("testuser")));
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().username, "testuser");
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn error_resolves_to_unauthenticated_with_message() {
    let mut state = AuthState::default();
    reduce(&mut state, AuthAction::Success(user("testuser")));
    reduce(&mut state, AuthAction::Loading);
    reduce(&mut state, AuthAction::Error("Incorrect email or password.".to_owned()));
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Incorrect email or password."));
}

#[test]
fn logout_resolves_clean() {
    let mut state = AuthState::default();
    reduce(&mut state, AuthAction::Success(user("testuser")));
    reduce(&mut state, AuthAction::Logout);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert!(state.resolved());
}

#[test]
fn authenticated_implies_user_present_across_all_transitions() {
    let mut state = AuthState::default();
    let actions = [
        AuthAction::Loading,
        AuthAction::Success(user("a")),
        AuthAction::Loading,
        AuthAction::Error("boom".to_owned()),
        AuthAction::Success(user("b")),
        AuthAction::ClearError,
        AuthAction::Logout,
    ];
    for action in actions {
        reduce(&mut state, action);
        assert!(!state.is_authenticated || state.user.is_some());
    }
}

// =============================================================
// ClearError
// =============================================================

#[test]
fn clear_error_is_idempotent_and_leaves_identity_alone() {
    let mut state = AuthState::default();
    reduce(&mut state, AuthAction::Success(user("testuser")));
    state.error = Some("stale".to_owned());

    reduce(&mut state, AuthAction::ClearError);
    assert!(state.error.is_none());
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().username, "testuser");

    let snapshot = state.clone();
    reduce(&mut state, AuthAction::ClearError);
    assert_eq!(state, snapshot);
}
