//! Tasks page — the protected landing view.
//!
//! Exists mainly to exercise the session core end to end: it reads the
//! identity from the auth state, loads its list through the authorized fetch
//! (bearer token, silent refresh round), and runs the named `force_logout`
//! teardown when a protected call resolves to an auth failure.

use leptos::prelude::*;
use serde::Deserialize;

use crate::net::http;
use crate::state::auth::AuthState;
use crate::state::session;
use crate::state::toast::ToastState;

/// A task row as returned by `GET /tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Protected home page listing the user's tasks.
#[component]
pub fn TasksPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let tasks = LocalResource::new(|| http::fetch_authorized_json::<Vec<TaskItem>>("/tasks"));

    // An expired session discovered by a protected call ends the session
    // here; the route guard then redirects to sign-in.
    Effect::new(move || {
        if let Some(Err(err)) = tasks.get() {
            if err.is_auth_failure() {
                session::force_logout(auth);
            }
        }
    });

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            session::logout(auth, toasts).await;
        });
    };

    let username = move || {
        auth.get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <div class="tasks-page">
            <header class="tasks-page__header">
                <h1>"Your tasks"</h1>
                <span class="tasks-page__user">{username}</span>
                <button class="btn" on:click=on_logout>"Sign out"</button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading tasks..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="tasks-page__empty">"No tasks yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="tasks-page__list">
                                        {list
                                            .into_iter()
                                            .map(|task| {
                                                let class = if task.completed {
                                                    "task task--done"
                                                } else {
                                                    "task"
                                                };
                                                view! { <li class=class>{task.title}</li> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="tasks-page__error">{err.message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <ChangePasswordForm/>
        </div>
    }
}

/// Collapsible change-password form.
#[component]
fn ChangePasswordForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current_value = current.get_untracked();
        let new_value = new.get_untracked();
        leptos::task::spawn_local(async move {
            if session::change_password(toasts, &current_value, &new_value).await.is_ok() {
                current.set(String::new());
                new.set(String::new());
            }
        });
    };

    view! {
        <details class="tasks-page__account">
            <summary>"Change password"</summary>
            <form on:submit=on_submit>
                <input
                    type="password"
                    placeholder="Current password"
                    prop:value=current
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="New password"
                    prop:value=new
                    on:input=move |ev| new.set(event_target_value(&ev))
                />
                <button type="submit" class="btn">"Update password"</button>
            </form>
        </details>
    }
}
