use super::*;

use futures::executor::block_on;

/// Recorded effect of one submission attempt, in application order.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Recorded {
    PersistedToken(String),
    SetUser(i64),
    Success(String),
    Error(String),
    NavigatedHome,
    ClearedSubmitting,
}

#[derive(Default)]
struct RecordingEffects {
    events: Vec<Recorded>,
}

impl LoginEffects for RecordingEffects {
    fn persist_token(&mut self, token: &str) {
        self.events.push(Recorded::PersistedToken(token.to_owned()));
    }

    fn set_current_user(&mut self, user: User) {
        self.events.push(Recorded::SetUser(user.id));
    }

    fn notify_success(&mut self, message: &str) {
        self.events.push(Recorded::Success(message.to_owned()));
    }

    fn notify_error(&mut self, message: &str) {
        self.events.push(Recorded::Error(message.to_owned()));
    }

    fn navigate_home(&mut self) {
        self.events.push(Recorded::NavigatedHome);
    }

    fn clear_submitting(&mut self) {
        self.events.push(Recorded::ClearedSubmitting);
    }
}

fn ok_response() -> Result<LoginResponse, String> {
    Ok(LoginResponse {
        user: User {
            id: 1,
            email: "a@b.com".to_owned(),
            name: None,
        },
        token: "abc123".to_owned(),
    })
}

// =============================================================
// Success path
// =============================================================

#[test]
fn success_persists_token_sets_user_notifies_and_navigates() {
    let mut effects = RecordingEffects::default();
    block_on(complete_login(async { ok_response() }, &mut effects));
    assert_eq!(
        effects.events,
        vec![
            Recorded::PersistedToken("abc123".to_owned()),
            Recorded::SetUser(1),
            Recorded::Success(LOGIN_SUCCESS_MESSAGE.to_owned()),
            Recorded::NavigatedHome,
            Recorded::ClearedSubmitting,
        ]
    );
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn failure_only_notifies_and_clears_submitting() {
    let mut effects = RecordingEffects::default();
    block_on(complete_login(
        async { Err("login failed: 401".to_owned()) },
        &mut effects,
    ));
    assert_eq!(
        effects.events,
        vec![
            Recorded::Error(LOGIN_FAILURE_MESSAGE.to_owned()),
            Recorded::ClearedSubmitting,
        ]
    );
}

#[test]
fn transport_and_rejection_failures_collapse_to_one_message() {
    for detail in ["network unreachable", "login failed: 500", "bad body"] {
        let mut effects = RecordingEffects::default();
        block_on(complete_login(async { Err(detail.to_owned()) }, &mut effects));
        assert_eq!(
            effects.events,
            vec![
                Recorded::Error("Invalid credentials".to_owned()),
                Recorded::ClearedSubmitting,
            ]
        );
    }
}

// =============================================================
// Cleanup ordering and idempotence
// =============================================================

#[test]
fn clear_submitting_is_last_on_both_paths() {
    let mut success = RecordingEffects::default();
    block_on(complete_login(async { ok_response() }, &mut success));
    assert_eq!(success.events.last(), Some(&Recorded::ClearedSubmitting));

    let mut failure = RecordingEffects::default();
    block_on(complete_login(async { Err("boom".to_owned()) }, &mut failure));
    assert_eq!(failure.events.last(), Some(&Recorded::ClearedSubmitting));
}

#[test]
fn sequential_identical_submissions_repeat_the_same_outcome() {
    let mut first = RecordingEffects::default();
    block_on(complete_login(async { ok_response() }, &mut first));
    let mut second = RecordingEffects::default();
    block_on(complete_login(async { ok_response() }, &mut second));
    assert_eq!(first.events, second.events);
}

// =============================================================
// Submit guard
// =============================================================

#[test]
fn submit_guard_blocks_while_a_request_is_outstanding() {
    let valid = validate("a@b.com", "password123");
    assert!(should_accept_submit(false, &valid));
    assert!(!should_accept_submit(true, &valid));
}

#[test]
fn submit_guard_blocks_invalid_fields() {
    let invalid = validate("abc", "short");
    assert!(!should_accept_submit(false, &invalid));
}
