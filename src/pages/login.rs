//! Login page: email/password form, client-side validation, and the
//! authentication submission workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form gates submission on the validation rules in `util::validate`,
//! posts credentials through `net::api`, and on success hands the user to
//! the shared session store, persists the token, and redirects home. Every
//! failure collapses into one generic notification on purpose: the UI does
//! not distinguish rejected credentials from transport errors.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;

use leptos::prelude::*;

use crate::app::{FORGOT_PASSWORD_ROUTE, HOME_ROUTE, SIGNUP_ROUTE};
use crate::components::field_input::FieldInput;
use crate::net::types::{Credentials, LoginResponse, User};
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::validate::{ValidationErrors, validate};

/// Toast shown when the server confirms the credentials.
pub(crate) const LOGIN_SUCCESS_MESSAGE: &str = "Login success";
/// Toast shown for every failure, rejected credentials and transport errors
/// alike.
pub(crate) const LOGIN_FAILURE_MESSAGE: &str = "Invalid credentials";

/// Side effects of one login attempt, injected so tests can substitute a
/// recording implementation for the browser-backed one.
pub(crate) trait LoginEffects {
    /// Persist the session token to durable storage.
    fn persist_token(&mut self, token: &str);
    /// Hand the confirmed user to the shared session store.
    fn set_current_user(&mut self, user: User);
    /// Fire-and-forget success notification.
    fn notify_success(&mut self, message: &str);
    /// Fire-and-forget error notification.
    fn notify_error(&mut self, message: &str);
    /// Navigate to the home route.
    fn navigate_home(&mut self);
    /// Unlock the submit control.
    fn clear_submitting(&mut self);
}

/// Drive one submission attempt to completion.
///
/// Success applies its effects in order: token, session user, notification,
/// navigation. Failure only notifies. `clear_submitting` runs after both
/// branches so the form always returns to an editable idle state.
pub(crate) async fn complete_login<Fut>(request: Fut, effects: &mut impl LoginEffects)
where
    Fut: Future<Output = Result<LoginResponse, String>>,
{
    match request.await {
        Ok(response) => {
            effects.persist_token(&response.token);
            effects.set_current_user(response.user);
            effects.notify_success(LOGIN_SUCCESS_MESSAGE);
            effects.navigate_home();
        }
        Err(_) => effects.notify_error(LOGIN_FAILURE_MESSAGE),
    }
    effects.clear_submitting();
}

/// Submit guard: one request at a time, and only for valid fields.
pub(crate) fn should_accept_submit(submitting: bool, errors: &ValidationErrors) -> bool {
    !submitting && errors.is_empty()
}

/// Browser-backed [`LoginEffects`]: context signals, localStorage, location.
struct BrowserEffects {
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    submitting: RwSignal<bool>,
}

impl LoginEffects for BrowserEffects {
    fn persist_token(&mut self, token: &str) {
        crate::util::storage::save_token(token);
    }

    fn set_current_user(&mut self, user: User) {
        self.session.update(|s| s.user = Some(user));
    }

    fn notify_success(&mut self, message: &str) {
        let message = message.to_owned();
        self.toasts.update(|t| t.show(ToastKind::Success, message));
    }

    fn notify_error(&mut self, message: &str) {
        let message = message.to_owned();
        self.toasts.update(|t| t.show(ToastKind::Error, message));
    }

    fn navigate_home(&mut self) {
        crate::util::nav::redirect(HOME_ROUTE);
    }

    fn clear_submitting(&mut self) {
        self.submitting.set(false);
    }
}

/// Login page — validated email/password form posting to the auth endpoint.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_touched = RwSignal::new(false);
    let password_touched = RwSignal::new(false);
    let attempted = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let errors = Memo::new(move |_| validate(&email.get(), &password.get()));
    let email_error = Signal::derive(move || {
        errors
            .get()
            .email
            .filter(|_| email_touched.get() || attempted.get())
    });
    let password_error = Signal::derive(move || {
        errors
            .get()
            .password
            .filter(|_| password_touched.get() || attempted.get())
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        attempted.set(true);
        if !should_accept_submit(submitting.get(), &errors.get()) {
            return;
        }
        let credentials = Credentials {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        submitting.set(true);
        let mut effects = BrowserEffects {
            session,
            toasts,
            submitting,
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            complete_login(crate::net::api::login(&credentials), &mut effects).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &mut effects);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <p class="login-card__subtitle">"Welcome back to the store"</p>
                <form class="login-form" on:submit=on_submit>
                    <FieldInput
                        label="Email"
                        name="email"
                        placeholder="Enter Email"
                        input_type="email"
                        value=email
                        touched=email_touched
                        error=email_error
                    />
                    <FieldInput
                        label="Password"
                        name="password"
                        placeholder="Password"
                        input_type="password"
                        value=password
                        touched=password_touched
                        error=password_error
                    />
                    <button class="login-button" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="login-card__link">
                    "Don't have an account? "
                    <a href=SIGNUP_ROUTE>"Sign up."</a>
                </p>
                <p class="login-card__link">
                    "Forgot password? "
                    <a href=FORGOT_PASSWORD_ROUTE>"Reset here."</a>
                </p>
            </div>
        </div>
    }
}
