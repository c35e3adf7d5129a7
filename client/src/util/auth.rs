//! Route-guard decision for protected subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root route wraps every protected page in one guard, so all of them
//! apply identical unauthenticated redirect behavior.
//!
//! Once hydration has loaded storage, every navigation re-reads it. The check
//! is still point-in-time: any stored credential counts as authorized, with
//! no expiry or signature check. A stale token is only discovered when
//! an API call fails, and nothing reacts to that 401 globally.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::paths::LOGIN_PATH;
use crate::state::session::SessionState;

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Storage not read yet (server render, or before hydration finishes).
    Pending,
    /// Render the nested route.
    Authorized,
    /// Redirect to the login path.
    Unauthorized,
}

pub fn gate_decision(state: &SessionState) -> GateDecision {
    match (state.loaded, state.has_credential) {
        (false, _) => GateDecision::Pending,
        (true, true) => GateDecision::Authorized,
        (true, false) => GateDecision::Unauthorized,
    }
}

/// Condition in the shape `ProtectedParentRoute` expects: `None` while
/// pending, otherwise whether to render.
pub fn gate_condition(state: &SessionState) -> Option<bool> {
    match gate_decision(state) {
        GateDecision::Pending => None,
        GateDecision::Authorized => Some(true),
        GateDecision::Unauthorized => Some(false),
    }
}

/// Where an unauthorized navigation lands.
pub fn unauthorized_redirect() -> &'static str {
    LOGIN_PATH
}
