//! Access guard for protected views.
//!
//! The guard is a pure function of [`SessionState`]. Rendering layers ask it
//! before constructing a protected view, so a guest never triggers the
//! view's data fetches.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::store::SessionState;

/// Path of the entry (login) view.
pub const DEFAULT_ENTRY_PATH: &str = "/";

/// Outcome of evaluating the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect { to: String },
}

/// A protected view was refused; the caller should navigate to `redirect_to`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("session required, redirecting to {redirect_to}")]
pub struct Denied {
    pub redirect_to: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessGuard {
    entry_path: String,
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY_PATH)
    }
}

impl AccessGuard {
    pub fn new(entry_path: impl Into<String>) -> Self {
        Self { entry_path: entry_path.into() }
    }

    #[must_use]
    pub fn entry_path(&self) -> &str {
        &self.entry_path
    }

    #[must_use]
    pub fn evaluate(&self, state: SessionState) -> GuardDecision {
        match state {
            SessionState::Authenticated => GuardDecision::Render,
            SessionState::Guest => GuardDecision::Redirect { to: self.entry_path.clone() },
        }
    }

    /// Run `render` only when the session is authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`Denied`] for a guest; `render` is not called.
    pub fn admit<T, F>(&self, state: SessionState, render: F) -> Result<T, Denied>
    where
        F: FnOnce() -> T,
    {
        match self.evaluate(state) {
            GuardDecision::Render => Ok(render()),
            GuardDecision::Redirect { to } => {
                log::debug!("guard: redirecting guest to {to}");
                Err(Denied { redirect_to: to })
            }
        }
    }
}
