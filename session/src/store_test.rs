use super::*;
use crate::persist::StorageError;

/// Store whose backing medium rejects every operation.
struct BrokenStore;

impl TokenStore for BrokenStore {
    fn save(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }

    fn load(&self) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("no window".to_owned()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_store_is_guest() {
    let session = SessionStore::in_memory();
    assert_eq!(session.state(), SessionState::Guest);
    assert!(!session.is_authenticated());
    assert_eq!(session.current_token(), None);
}

#[test]
fn login_authenticates_with_token() {
    let mut session = SessionStore::in_memory();
    session.login("abc");
    assert!(session.is_authenticated());
    assert_eq!(session.current_token(), Some("abc"));
    assert_eq!(session.state(), SessionState::Authenticated);
}

#[test]
fn logout_clears_from_authenticated() {
    let mut session = SessionStore::in_memory();
    session.login("abc");
    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.current_token(), None);
}

#[test]
fn logout_as_guest_is_noop() {
    let mut session = SessionStore::in_memory();
    session.logout();
    session.logout();
    assert_eq!(session.state(), SessionState::Guest);
}

#[test]
fn repeated_login_with_same_token_is_idempotent() {
    let mut once = SessionStore::in_memory();
    once.login("abc");

    let mut twice = SessionStore::in_memory();
    twice.login("abc");
    twice.login("abc");

    assert_eq!(once.current_token(), twice.current_token());
    assert_eq!(once.state(), twice.state());
    assert_eq!(once.storage().raw(), twice.storage().raw());
}

#[test]
fn second_login_overwrites_first() {
    let mut session = SessionStore::in_memory();
    session.login("abc");
    session.login("def");
    assert_eq!(session.current_token(), Some("def"));
    assert_eq!(session.storage().load().unwrap(), Some("def".to_owned()));
}

#[test]
fn blank_login_leaves_guest() {
    let mut session = SessionStore::in_memory();
    session.login("abc");
    session.login("   ");
    assert_eq!(session.state(), SessionState::Guest);
    assert_eq!(session.current_token(), None);
    assert_eq!(session.storage().load().unwrap(), None);
}

#[test]
fn bearer_header_formats_authorization_value() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn login_and_logout_mirror_to_storage() {
    let mut session = SessionStore::in_memory();
    session.login("abc");
    assert_eq!(session.storage().load().unwrap(), Some("abc".to_owned()));
    session.logout();
    assert_eq!(session.storage().load().unwrap(), None);
}

#[test]
fn restore_recovers_persisted_token() {
    let storage = MemoryTokenStore::new();
    storage.save("persisted").unwrap();
    let session = SessionStore::restore(storage);
    assert_eq!(session.current_token(), Some("persisted"));
}

#[test]
fn restore_without_data_is_guest() {
    let session = SessionStore::restore(MemoryTokenStore::new());
    assert_eq!(session.state(), SessionState::Guest);
}

#[test]
fn restore_with_corrupt_data_is_guest() {
    let session = SessionStore::restore(MemoryTokenStore::with_raw("%%%"));
    assert_eq!(session.state(), SessionState::Guest);
}

#[test]
fn restore_with_blank_token_is_guest() {
    let session = SessionStore::restore(MemoryTokenStore::with_raw(r#"{"token":"  "}"#));
    assert_eq!(session.state(), SessionState::Guest);
}

#[test]
fn restore_with_unavailable_storage_is_guest() {
    let session = SessionStore::restore(BrokenStore);
    assert_eq!(session.state(), SessionState::Guest);
}

#[test]
fn storage_failures_do_not_affect_login_or_logout() {
    let mut session = SessionStore::new(BrokenStore);
    session.login("abc");
    assert_eq!(session.current_token(), Some("abc"));
    session.logout();
    assert_eq!(session.current_token(), None);
}

#[test]
fn logout_as_guest_clears_stale_storage() {
    let storage = MemoryTokenStore::with_raw("garbage");
    let mut session = SessionStore::new(storage);
    session.logout();
    assert!(session.storage().raw().is_none());
}
