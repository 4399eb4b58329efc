//! Registration page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session;
use crate::state::toast::ToastState;

/// Registration page — on success the session layer either signs the user
/// straight in (backend issued tokens) or leaves them at the sign-in form
/// with a success toast (backend did not).
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().is_loading {
            return;
        }
        let username_value = username.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            let _ = session::register(auth, toasts, &username_value, &email_value, &password_value)
                .await;
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Create your account"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=username
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
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
                    {move || if auth.get().is_loading { "Creating..." } else { "Create account" }}
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
                <a href="/login">"Already have an account? Sign in"</a>
            </p>
        </div>
    }
}
