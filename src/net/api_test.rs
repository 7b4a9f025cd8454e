use super::*;

#[test]
fn login_endpoint_is_fixed() {
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn bearer_header_value_prefixes_token() {
    assert_eq!(bearer_header_value("abc123"), "Bearer abc123");
}
