//! Route guards gating rendering and navigation on session status.
//!
//! Both guards are read-only reactive consumers of the auth state. Neither
//! ever navigates while the startup check is still loading — that would
//! flash-redirect users who are about to resolve as authenticated — and each
//! redirects at most once per mount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Wraps protected content. Shows a placeholder while the session is
/// unresolved, redirects to the sign-in route once resolved unauthenticated,
/// and renders children only for an authenticated session.
#[component]
pub fn RequireAuth(
    /// Destination for unauthenticated visitors.
    #[prop(into, default = String::from("/login"))]
    redirect_to: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let redirected = StoredValue::new(false);

    Effect::new(move || {
        let state = auth.get();
        if !state.is_loading && !state.is_authenticated && !redirected.get_value() {
            redirected.set_value(true);
            navigate(&redirect_to, NavigateOptions::default());
        }
    });

    view! {
        {move || {
            let state = auth.get();
            if state.is_loading {
                view! { <div class="route-guard__loading">"Loading..."</div> }.into_any()
            } else if state.is_authenticated {
                children().into_any()
            } else {
                ().into_any()
            }
        }}
    }
}

/// Wraps guest-only content (sign-in, registration). Symmetric to
/// [`RequireAuth`]: an authenticated session is redirected to the signed-in
/// landing route.
#[component]
pub fn GuestOnly(
    /// Destination for already-authenticated visitors.
    #[prop(into, default = String::from("/"))]
    redirect_to: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let redirected = StoredValue::new(false);

    Effect::new(move || {
        let state = auth.get();
        if !state.is_loading && state.is_authenticated && !redirected.get_value() {
            redirected.set_value(true);
            navigate(&redirect_to, NavigateOptions::default());
        }
    });

    view! {
        {move || {
            let state = auth.get();
            if state.is_loading {
                view! { <div class="route-guard__loading">"Loading..."</div> }.into_any()
            } else if state.is_authenticated {
                ().into_any()
            } else {
                children().into_any()
            }
        }}
    }
}
