//! Sign-up placeholder page.
//!
//! Linked from the login card; account creation itself lives outside this
//! crate's scope, so the route only renders a pointer back.

use leptos::prelude::*;

use crate::app::LOGIN_ROUTE;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign up"</h1>
                <p>"Account creation is coming soon."</p>
                <p class="auth-card__link">
                    "Already have an account? "
                    <a href=LOGIN_ROUTE>"Log in."</a>
                </p>
            </div>
        </div>
    }
}
