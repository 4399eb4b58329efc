//! Password reset completion page, reached from the emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::session;
use crate::state::toast::ToastState;

/// Reset page — reads the reset token from the `token` query parameter and
/// submits the new password. On success the user is pointed at sign-in.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();

    let new_password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = query.get_untracked().get("token").unwrap_or_default();
        let password_value = new_password.get_untracked();
        leptos::task::spawn_local(async move {
            let _ = session::reset_password(toasts, &token, &password_value).await;
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Choose a new password"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                <input
                    type="password"
                    placeholder="New password"
                    prop:value=new_password
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">"Reset password"</button>
            </form>
            <p class="auth-page__links">
                <a href="/login">"Back to sign in"</a>
            </p>
        </div>
    }
}
