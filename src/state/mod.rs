//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the current authenticated user for the whole app;
//! `toast` holds the transient notification surface. Both are provided as
//! `RwSignal` context values by `app::App`.

pub mod session;
pub mod toast;
