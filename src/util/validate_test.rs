use super::*;

// =============================================================
// Email rule
// =============================================================

#[test]
fn empty_email_is_required() {
    assert_eq!(email_error(""), Some("Required"));
    assert_eq!(email_error("   "), Some("Required"));
}

#[test]
fn malformed_email_is_invalid() {
    assert_eq!(email_error("abc"), Some("Invalid email"));
    assert_eq!(email_error("@b.com"), Some("Invalid email"));
    assert_eq!(email_error("a@"), Some("Invalid email"));
    assert_eq!(email_error("a@b"), Some("Invalid email"));
    assert_eq!(email_error("a@b..com"), Some("Invalid email"));
    assert_eq!(email_error("a b@c.com"), Some("Invalid email"));
    assert_eq!(email_error("a@b@c.com"), Some("Invalid email"));
}

#[test]
fn well_formed_email_passes() {
    assert_eq!(email_error("a@b.com"), None);
    assert_eq!(email_error("first.last@shop.example.co"), None);
    // Surrounding whitespace is trimmed before the shape check.
    assert_eq!(email_error("  a@b.com  "), None);
}

// =============================================================
// Password rule
// =============================================================

#[test]
fn empty_password_is_required() {
    assert_eq!(password_error(""), Some("Required"));
}

#[test]
fn short_password_hits_min_length() {
    assert_eq!(password_error("short"), Some("Must be at least 8 characters"));
    assert_eq!(password_error("1234567"), Some("Must be at least 8 characters"));
}

#[test]
fn long_enough_password_passes() {
    assert_eq!(password_error("password123"), None);
    assert_eq!(password_error("12345678"), None);
}

#[test]
fn password_is_not_trimmed() {
    // Eight characters including spaces is a valid password.
    assert_eq!(password_error("  pass  "), None);
}

// =============================================================
// Combined
// =============================================================

#[test]
fn both_fields_are_checked_independently() {
    let errors = validate("", "short");
    assert_eq!(errors.email, Some("Required"));
    assert_eq!(errors.password, Some("Must be at least 8 characters"));
    assert!(!errors.is_empty());
}

#[test]
fn valid_credentials_produce_no_errors() {
    let errors = validate("a@b.com", "password123");
    assert_eq!(errors, ValidationErrors::default());
    assert!(errors.is_empty());
}
