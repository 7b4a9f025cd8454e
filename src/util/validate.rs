//! Credential validation rules for the login form.
//!
//! DESIGN
//! ======
//! Pure functions from field values to error messages — no signals, no
//! side effects — so the rules are unit-testable and re-runnable on every
//! edit and submit attempt. Both fields are always checked; errors do not
//! short-circuit each other.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Per-field validation errors; all-`None` means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl ValidationErrors {
    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate both credential fields independently.
pub fn validate(email: &str, password: &str) -> ValidationErrors {
    ValidationErrors {
        email: email_error(email),
        password: password_error(password),
    }
}

/// Email rule: required, then well-formed shape.
pub fn email_error(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        Some("Required")
    } else if !is_well_formed_email(email) {
        Some("Invalid email")
    } else {
        None
    }
}

/// Password rule: required, then minimum length. Never trimmed — leading or
/// trailing whitespace is part of the password.
pub fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Required")
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Must be at least 8 characters")
    } else {
        None
    }
}

/// Shape check: `local@domain` with a non-empty local part and a dotted
/// domain of non-empty labels. An approximation, not RFC 5322 — the server
/// remains the authority on whether an address actually exists.
fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
