//! Storefront landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The post-login destination. Reads the shared session store to greet the
//! signed-in user; anonymous visitors get a link to the login page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::LOGIN_ROUTE;
use crate::net::types::User;
use crate::state::session::SessionState;

/// Display label for the current visitor.
pub(crate) fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => {
            let name = user.name.as_deref().unwrap_or(&user.email);
            format!("Welcome back, {name}")
        }
        None => "Welcome to the store".to_owned(),
    }
}

/// Home page — greets the session user or offers the login route.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <h1>{move || greeting(session.get().user.as_ref())}</h1>
            <Show when=move || !session.get().loading && !session.get().is_authenticated()>
                <p class="home-page__prompt">
                    <a href=LOGIN_ROUTE>"Log in"</a>
                    " to see your orders and saved items."
                </p>
            </Show>
        </div>
    }
}
