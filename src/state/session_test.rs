use super::*;

#[test]
fn session_state_default_is_empty_and_idle() {
    let state = SessionState::default();
    assert_eq!(state.user, None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_with_user_is_authenticated() {
    let state = SessionState {
        user: Some(User {
            id: 1,
            email: "a@b.com".to_owned(),
            name: None,
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
