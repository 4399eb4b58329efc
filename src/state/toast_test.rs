use super::*;

// =============================================================
// Queue behavior
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.items.is_empty());
}

#[test]
fn push_keeps_order_and_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let a = state.success("signed in");
    let b = state.error("boom");
    let c = state.info("signed out");
    assert!(a < b && b < c);
    let messages: Vec<_> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["signed in", "boom", "signed out"]);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);

    // Unknown id is a no-op.
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.success("one");
    state.dismiss(a);
    let b = state.success("two");
    assert!(b > a);
}
