//! Programmatic navigation helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Post-login navigation uses a full location change rather than the router's
//! client-side navigate so every context provider re-initializes against the
//! fresh session. No-op outside the browser.

/// Send the browser to `path`.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
