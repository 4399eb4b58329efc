//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{GuestOnly, RequireAuth};
use crate::components::toasts::ToastHost;
use crate::pages::{
    login::LoginPage, register::RegisterPage, reset_password::ResetPasswordPage, tasks::TasksPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, kicks off the one-shot startup
/// auth check, and sets up client-side routing with guarded routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    // Resolve the session exactly once per page load. Until this lands the
    // guards render their loading placeholder instead of redirecting.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::session::check_auth(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdeck.css"/>
        <Title text="Taskdeck"/>

        <ToastHost/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestOnly><LoginPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <GuestOnly><RegisterPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("reset-password")
                    view=|| view! { <GuestOnly><ResetPasswordPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><TasksPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
