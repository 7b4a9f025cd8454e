//! Session state for the current storefront user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Process-wide holder of the authenticated user: initialized empty at
//! startup, set by the login page's success path, read by any component
//! that renders identity-dependent UI. Mutation happens through the
//! context signal so pages stay testable with substitute implementations.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Session state tracking the current user and the startup restore status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The authenticated user, if any.
    pub user: Option<User>,
    /// True while the startup token-to-user restore is in flight.
    pub loading: bool,
}

impl SessionState {
    /// Whether a confirmed user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
