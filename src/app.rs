//! Root application component: routing plus shared context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides `SessionState` and `ToastState` via Leptos context so any route
//! or component can read the current user and emit notifications. Pages own
//! the rest of their orchestration.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toast_host::ToastHost;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignUpPage;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Authenticated landing route.
pub const HOME_ROUTE: &str = "/";
/// Login form route.
pub const LOGIN_ROUTE: &str = "/login";
/// Account creation route (linked from login, logic out of scope here).
pub const SIGNUP_ROUTE: &str = "/signup";
/// Password reset route (linked from login, logic out of scope here).
pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot-password";

/// Application shell: context providers, toast host, and the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Restore an existing session on startup: a previously stored token is
    // exchanged for the current user so refreshes keep the user signed in.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.update(|s| s.loading = true);
        let user = match crate::util::storage::load_token() {
            Some(token) => crate::net::api::fetch_current_user(&token).await,
            None => None,
        };
        session.update(|s| {
            s.user = user;
            s.loading = false;
        });
    });

    view! {
        <Title text="Storefront"/>
        <ToastHost/>
        <Router>
            <Routes fallback=|| view! { <p class="route-missing">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignUpPage/>
                <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
            </Routes>
        </Router>
    }
}
