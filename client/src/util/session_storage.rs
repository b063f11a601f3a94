//! `localStorage`-backed [`TokenStore`] for the session.
//!
//! Requires a browser environment; native builds behave as an empty store
//! that accepts writes, so the app starts as a guest.

#[cfg(feature = "csr")]
use session::PersistedSession;
use session::{StorageError, TokenStore};

/// Key the session record is stored under.
pub const STORAGE_KEY: &str = "habit_tracker_session";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

impl TokenStore for BrowserTokenStore {
    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let raw = PersistedSession::encode(token)?;
            local_storage()?
                .set_item(STORAGE_KEY, &raw)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Ok(())
        }
    }

    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?
                .get_item(STORAGE_KEY)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?;
            match raw {
                Some(raw) => PersistedSession::decode(&raw).map(|record| Some(record.token)),
                None => Ok(None),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(STORAGE_KEY)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
