use super::*;

#[test]
fn toast_state_default_shows_nothing() {
    let state = ToastState::default();
    assert_eq!(state.current, None);
    assert_eq!(state.seq, 0);
}

#[test]
fn show_replaces_current_and_bumps_seq() {
    let mut state = ToastState::default();
    state.show(ToastKind::Success, "Login success");
    assert_eq!(state.seq, 1);
    assert_eq!(state.current.as_ref().unwrap().message, "Login success");

    state.show(ToastKind::Error, "Invalid credentials");
    assert_eq!(state.seq, 2);
    let current = state.current.as_ref().unwrap();
    assert_eq!(current.kind, ToastKind::Error);
    assert_eq!(current.message, "Invalid credentials");
}

#[test]
fn dismiss_ignores_stale_seq() {
    let mut state = ToastState::default();
    state.show(ToastKind::Success, "first");
    let first_seq = state.seq;
    state.show(ToastKind::Error, "second");

    state.dismiss(first_seq);
    assert!(state.current.is_some());

    state.dismiss(state.seq);
    assert_eq!(state.current, None);
}

#[test]
fn toast_kind_css_classes_are_distinct() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
}
