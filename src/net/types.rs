//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the authentication endpoint payloads exactly so serde
//! round-trips stay lossless; nothing here inspects or interprets the token.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User-supplied email and password pending authentication.
///
/// Built fresh per submission attempt and sent as the login POST body;
/// never persisted locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email, trimmed of surrounding whitespace.
    pub email: String,
    /// Account password, sent exactly as typed.
    pub password: String,
}

/// A server-confirmed identity as returned on successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Account email.
    pub email: String,
    /// Display name, if the account has one.
    #[serde(default)]
    pub name: Option<String>,
}

/// Success body of the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user; ownership moves to the session store.
    pub user: User,
    /// Opaque session token persisted for later authorized calls.
    pub token: String,
}
