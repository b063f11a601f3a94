//! Durable token storage capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store mirrors its token through a [`TokenStore`] so a reload
//! can recover the session. The browser build backs this with
//! `localStorage`; tests and non-browser builds use [`MemoryTokenStore`].
//! Both hold the same JSON encoding so corrupt data is handled identically.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Failure reading or writing the persisted session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store cannot be reached (no window, storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Persisted data exists but does not decode.
    #[error("persisted session is corrupt: {0}")]
    Corrupt(String),

    /// The backing store rejected a write or delete.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Key-value capability used to save and restore the session token.
pub trait TokenStore {
    /// Persist `token` as the current session.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store rejects the write.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Load the previously persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store is unreachable or holds data
    /// that does not decode.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Remove any persisted token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store rejects the delete.
    fn clear(&self) -> Result<(), StorageError>;
}

/// On-disk shape of a persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
}

impl PersistedSession {
    /// Encode `token` into its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if serialization fails.
    pub fn encode(token: &str) -> Result<String, StorageError> {
        let record = Self { token: token.to_owned() };
        serde_json::to_string(&record).map_err(|e| StorageError::Write(e.to_string()))
    }

    /// Decode a persisted JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if `raw` is not a valid record.
    pub fn decode(raw: &str) -> Result<Self, StorageError> {
        serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))
    }
}

/// In-process [`TokenStore`]. Clones share the same slot, which is what a
/// reload test needs: persist through one store, restore through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw persisted text, bypassing encoding.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Arc::new(Mutex::new(Some(raw.into()))) }
    }

    /// Raw persisted text, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) -> Result<(), StorageError> {
        let encoded = PersistedSession::encode(token)?;
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StorageError> {
        let Some(raw) = self.raw() else {
            return Ok(None);
        };
        PersistedSession::decode(&raw).map(|record| Some(record.token))
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
