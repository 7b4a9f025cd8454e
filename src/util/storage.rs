//! Browser localStorage helpers for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the login
//! page and the startup session restore don't repeat web-sys glue. The token
//! is stored as an opaque string; nothing here parses or validates it.

/// Fixed localStorage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persist the session token. No-op outside the browser.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Load the stored session token, if any. `None` outside the browser.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
