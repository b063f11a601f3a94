//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<AuthState>`. Route guards,
//! the navbar, and every page that calls the API read the session from it.
//! Mutating through `RwSignal::update` re-renders dependents synchronously.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{SessionState, SessionStore};

use crate::util::session_storage::BrowserTokenStore;

/// Authentication state wrapping the session store.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub session: SessionStore<BrowserTokenStore>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: SessionStore::new(BrowserTokenStore) }
    }
}

impl AuthState {
    /// Recover any session persisted by a previous page load.
    pub fn restore() -> Self {
        Self { session: SessionStore::restore(BrowserTokenStore) }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Owned copy of the token for moving into async request tasks.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.current_token().map(str::to_owned)
    }

    pub fn login(&mut self, token: &str) {
        self.session.login(token);
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }
}
