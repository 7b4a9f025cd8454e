//! REST API helpers for communicating with the storefront server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade UI behavior without crashing hydration. The login page
//! collapses every error here into one generic user-facing notification;
//! the distinct messages below exist for logs and tests only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, LoginResponse, User};

/// Fixed authentication endpoint the login form posts to.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Endpoint resolving a stored token back into the current user.
pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Submit credentials to the fixed login endpoint.
///
/// Returns the authenticated user and session token on success. One attempt
/// only: no retry, no timeout — a hung request simply never resolves, which
/// keeps the submit control disabled until the browser gives up.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body does not match the wire shape.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = login_failed_message(resp.status());
            log::warn!("{message}");
            return Err(message);
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Exchange a stored session token for the current user.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .header("Authorization", &bearer_header_value(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}
