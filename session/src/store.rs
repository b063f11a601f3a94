//! Session store: the single owner of the current bearer token.
//!
//! DESIGN
//! ======
//! The store is a plain owned value. Callers inject it where it is needed
//! (the client wraps it in a reactive signal) instead of reaching for a
//! global. `login` and `logout` are total: storage failures are logged and
//! never change the in-memory outcome.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::persist::{MemoryTokenStore, TokenStore};

/// `Authorization` header value carrying `token`.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Authentication state derived from the token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Guest,
    Authenticated,
}

/// Holder of the current session token, mirrored to a [`TokenStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    token: Option<String>,
    storage: S,
}

impl SessionStore<MemoryTokenStore> {
    /// A guest session with no durable persistence.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }
}

impl<S: TokenStore> SessionStore<S> {
    /// A guest session backed by `storage`. Does not read prior state; use
    /// [`SessionStore::restore`] at startup.
    pub fn new(storage: S) -> Self {
        Self { token: None, storage }
    }

    /// Recover the session persisted in `storage`.
    ///
    /// Absent, blank, unreadable, or corrupt data yields a guest session.
    pub fn restore(storage: S) -> Self {
        let token = match storage.load() {
            Ok(Some(token)) if !token.trim().is_empty() => {
                log::debug!("session: restored persisted token");
                Some(token)
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("session: discarding persisted token: {e}");
                None
            }
        };
        Self { token, storage }
    }

    /// Make `token` the active session, replacing any previous one.
    ///
    /// A blank token is not a credential; the store ends up as a guest.
    pub fn login(&mut self, token: &str) {
        if token.trim().is_empty() {
            log::warn!("session: ignoring blank token");
            self.logout();
            return;
        }
        let replaced = self.token.as_deref().is_some_and(|current| current != token);
        self.token = Some(token.to_owned());
        if let Err(e) = self.storage.save(token) {
            log::warn!("session: failed to persist token: {e}");
        }
        if replaced {
            log::info!("session: replaced active session");
        } else {
            log::info!("session: authenticated");
        }
    }

    /// End the session. Safe to call as a guest.
    pub fn logout(&mut self) {
        let ended = self.token.take().is_some();
        if let Err(e) = self.storage.clear() {
            log::warn!("session: failed to clear persisted token: {e}");
        }
        if ended {
            log::info!("session: logged out");
        }
    }

    #[must_use]
    pub fn current_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_authenticated() { SessionState::Authenticated } else { SessionState::Guest }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
