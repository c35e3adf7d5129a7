use super::*;
use crate::state::credentials::{CredentialStore, MemoryCredentials};

#[test]
fn no_stored_credential_redirects_to_login() {
    let state = SessionState::observe(&MemoryCredentials::default());
    assert_eq!(gate_decision(&state), GateDecision::Unauthorized);
    assert_eq!(gate_condition(&state), Some(false));
    assert_eq!(unauthorized_redirect(), "/login");
}

#[test]
fn any_stored_credential_renders_nested_route() {
    for token in ["abc", "expired.jwt.value", "x"] {
        let state = SessionState::observe(&MemoryCredentials::with_token(token));
        assert_eq!(gate_decision(&state), GateDecision::Authorized, "{token}");
        assert_eq!(gate_condition(&state), Some(true));
    }
}

#[test]
fn unloaded_session_neither_renders_nor_redirects() {
    let state = SessionState::default();
    assert_eq!(gate_decision(&state), GateDecision::Pending);
    assert_eq!(gate_condition(&state), None);
}

#[test]
fn clearing_the_credential_flips_the_gate() {
    let store = MemoryCredentials::with_token("abc");
    assert_eq!(gate_decision(&SessionState::observe(&store)), GateDecision::Authorized);
    store.clear();
    assert_eq!(gate_decision(&SessionState::observe(&store)), GateDecision::Unauthorized);
}
