//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and notification surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod field_input;
pub mod toast_host;
