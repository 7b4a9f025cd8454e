//! Password-reset placeholder page.
//!
//! Linked from the login card; the reset flow itself lives outside this
//! crate's scope, so the route only renders a pointer back.

use leptos::prelude::*;

use crate::app::LOGIN_ROUTE;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset password"</h1>
                <p>"Password reset is coming soon."</p>
                <p class="auth-card__link">
                    "Remembered it after all? "
                    <a href=LOGIN_ROUTE>"Log in."</a>
                </p>
            </div>
        </div>
    }
}
