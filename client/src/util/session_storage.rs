//! Persisted copy of the auth session (`auth_details`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Written on every successful auth response, read once at startup to seed a
//! session restore, and removed on logout or any auth failure. Malformed
//! stored data is treated as absent and never surfaces as an error.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use super::storage::KeyValueStore;
use crate::net::types::AuthResponse;

/// Fixed storage key for the persisted session record.
pub const AUTH_DETAILS_KEY: &str = "auth_details";

/// Persistence adapter for the session record over any [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStorage<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serialize and write the record under [`AUTH_DETAILS_KEY`].
    pub fn save(&mut self, record: &AuthResponse) {
        match serde_json::to_string(record) {
            Ok(raw) => self.store.set_item(AUTH_DETAILS_KEY, &raw),
            Err(e) => log::warn!("auth record encode failed: {e}"),
        }
    }

    /// Read the record back. Missing or unparsable data yields `None`.
    pub fn load(&self) -> Option<AuthResponse> {
        let raw = self.store.get_item(AUTH_DETAILS_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring malformed {AUTH_DETAILS_KEY}: {e}");
                None
            }
        }
    }

    /// Remove the record. Absent keys are fine.
    pub fn clear(&mut self) {
        self.store.remove_item(AUTH_DETAILS_KEY);
    }

    /// Token from the persisted record, if any.
    pub fn stored_token(&self) -> Option<String> {
        self.load().map(|record| record.access_token)
    }

    pub fn backend(&self) -> &S {
        &self.store
    }
}
