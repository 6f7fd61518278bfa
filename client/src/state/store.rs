//! Injected auth store: session state plus its persistence and credential.
//!
//! DESIGN
//! ======
//! One `AuthStore` is opened at app start and provided through Leptos context
//! as `RwSignal<AuthStore>`. It is never global. Every transition keeps three
//! things in step: the in-memory `AuthState`, the persisted `auth_details`
//! record, and the bearer credential attached to outbound calls.
//!
//! Each `request()` issues a [`RequestTicket`]. `logout()` and any newer
//! `request()` retire older tickets, so a response that lands after them is
//! dropped instead of resurrecting the session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::auth::AuthState;
use crate::net::api::bearer_header;
use crate::net::types::{AuthResponse, ErrorMessage};
use crate::util::session_storage::SessionStorage;
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Proof that a request was started; only the latest one may settle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug)]
pub struct AuthStore<S = LocalStorage> {
    state: AuthState,
    persistence: SessionStorage<S>,
    bearer: Option<String>,
    generation: u64,
}

impl<S: KeyValueStore> AuthStore<S> {
    /// Open the store over `storage`, seeding state and credential from any persisted record.
    pub fn open(storage: S) -> Self {
        let persistence = SessionStorage::new(storage);
        let state = AuthState::seeded(persistence.load());
        let mut store = Self { state, persistence, bearer: None, generation: 0 };
        store.sync_authorization_header();
        store
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn persistence(&self) -> &SessionStorage<S> {
        &self.persistence
    }

    /// Token attached to outbound calls.
    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    /// `Authorization` header value for outbound calls, if any.
    pub fn authorization_header(&self) -> Option<String> {
        self.bearer.as_deref().map(bearer_header)
    }

    /// Re-read the persisted token into the outbound credential.
    pub fn sync_authorization_header(&mut self) {
        self.bearer = self.persistence.stored_token();
    }

    pub fn request(&mut self) -> RequestTicket {
        self.generation += 1;
        self.state.request();
        log::debug!("auth request #{} started", self.generation);
        RequestTicket(self.generation)
    }

    /// Apply a successful response. Returns `false` if `ticket` is stale.
    pub fn succeed(&mut self, ticket: RequestTicket, payload: AuthResponse) -> bool {
        if !self.is_current(ticket) {
            log::warn!("discarding stale auth success for request #{}", ticket.0);
            return false;
        }
        self.persistence.save(&payload);
        self.sync_authorization_header();
        self.state.succeed(payload);
        log::debug!("auth request #{} succeeded", ticket.0);
        true
    }

    /// Apply a failure. Returns `false` if `ticket` is stale.
    pub fn fail(&mut self, ticket: RequestTicket, message: Option<ErrorMessage>) -> bool {
        if !self.is_current(ticket) {
            log::warn!("discarding stale auth failure for request #{}", ticket.0);
            return false;
        }
        self.persistence.clear();
        self.sync_authorization_header();
        self.state.fail(message);
        log::debug!("auth request #{} failed", ticket.0);
        true
    }

    /// Drop the session from any state. In-flight requests become stale.
    pub fn logout(&mut self) {
        self.generation += 1;
        self.persistence.clear();
        self.sync_authorization_header();
        self.state.logout();
        log::debug!("logged out");
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation && self.state.is_loading()
    }
}

/// A place an [`AuthStore`] lives and can be mutated from async code.
pub trait StoreHandle<S: KeyValueStore> {
    /// Run `f` against the store, or return `None` if it is gone.
    fn with_store<R>(&self, f: impl FnOnce(&mut AuthStore<S>) -> R) -> Option<R>;
}

impl<S> StoreHandle<S> for RwSignal<AuthStore<S>>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    fn with_store<R>(&self, f: impl FnOnce(&mut AuthStore<S>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<S: KeyValueStore> StoreHandle<S> for Rc<RefCell<AuthStore<S>>> {
    fn with_store<R>(&self, f: impl FnOnce(&mut AuthStore<S>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// The store as provided to components.
pub type AppStore = RwSignal<AuthStore<LocalStorage>>;
