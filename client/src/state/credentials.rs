//! Persisted bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in `localStorage` under a single fixed key. The API client
//! reads it before every request, login writes it, logout removes it. Nothing
//! validates or refreshes it client-side.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior; SSR paths behave as
//! if no credential exists so server rendering stays deterministic.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::cell::RefCell;
use std::rc::Rc;

/// `localStorage` key holding the bearer credential.
pub const TOKEN_STORAGE_KEY: &str = "academiasys_token";

/// Read/write access to the single credential slot.
pub trait CredentialStore {
    /// Current credential, or `None` when absent or empty.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn store(&self, token: &str);
    /// Remove the credential.
    fn clear(&self);
}

/// Treat blank stored values the same as a missing key.
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

/// Credential store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentials;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for BrowserCredentials {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            normalize_token(storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; credential not persisted");
                return;
            };
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("failed to persist credential");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; credential not cleared");
                return;
            };
            if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                log::warn!("failed to clear credential");
            }
        }
    }
}

/// In-process credential slot for server rendering and tests.
///
/// Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryCredentials {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.store(token);
        store
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        normalize_token(self.slot.borrow().clone())
    }

    fn store(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
