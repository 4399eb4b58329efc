//! Sign-in page with email/password form and a forgot-password flow.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session;
use crate::state::toast::ToastState;

/// Login page — submits credentials through the session state machine.
///
/// The submit button is disabled while an operation is in flight; that is
/// the double-dispatch protection the session layer expects from callers.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_forgot = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().is_loading {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            // Failure is already surfaced via state + toast; nothing to do here.
            let _ = session::login(auth, toasts, &email_value, &password_value).await;
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Taskdeck"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn btn--primary"
                    prop:disabled=move || auth.get().is_loading
                >
                    {move || if auth.get().is_loading { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <Show when=move || auth.get().error.is_some()>
                <div class="auth-page__error" role="alert">
                    {move || auth.get().error.unwrap_or_default()}
                    <button class="auth-page__error-dismiss" on:click=move |_| session::clear_error(auth)>
                        "×"
                    </button>
                </div>
            </Show>

            <p class="auth-page__links">
                <a href="/register">"Create an account"</a>
                <button class="btn btn--link" on:click=move |_| show_forgot.update(|v| *v = !*v)>
                    "Forgot password?"
                </button>
            </p>

            <Show when=move || show_forgot.get()>
                <ForgotPasswordForm/>
            </Show>
        </div>
    }
}

/// Inline form requesting a password reset email.
#[component]
fn ForgotPasswordForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        leptos::task::spawn_local(async move {
            let _ = session::request_password_reset(toasts, &email_value).await;
        });
    };

    view! {
        <form class="auth-page__forgot" on:submit=on_submit>
            <input
                type="email"
                placeholder="Email for reset link"
                prop:value=email
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button type="submit" class="btn">"Send reset link"</button>
        </form>
    }
}
