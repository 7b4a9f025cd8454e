//! Networking modules for the storefront HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the authentication endpoints and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
