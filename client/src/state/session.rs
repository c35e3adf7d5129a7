//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` context by the root component. The
//! route guard reads it; login and logout write it alongside the persisted
//! credential so both stay in step.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::credentials::CredentialStore;

/// Whether a credential is present, as last observed in storage.
///
/// `loaded` is false until the browser has read storage after hydration;
/// server rendering never leaves that state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub loaded: bool,
    pub has_credential: bool,
}

impl SessionState {
    pub fn signed_in() -> Self {
        Self { loaded: true, has_credential: true }
    }

    pub fn signed_out() -> Self {
        Self { loaded: true, has_credential: false }
    }

    /// Snapshot the credential slot.
    pub fn observe<C: CredentialStore>(credentials: &C) -> Self {
        if credentials.load().is_some() { Self::signed_in() } else { Self::signed_out() }
    }

    /// Re-read the slot once storage has been loaded; pending stays pending.
    pub fn refresh<C: CredentialStore>(self, credentials: &C) -> Self {
        if self.loaded { Self::observe(credentials) } else { self }
    }
}

/// Drop the persisted credential and return the signed-out snapshot.
///
/// The server-side session (if any) is left alone; the token simply stops
/// being sent.
pub fn sign_out<C: CredentialStore>(credentials: &C) -> SessionState {
    credentials.clear();
    SessionState::signed_out()
}
