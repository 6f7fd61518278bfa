//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards, the header, and the auth modal. Mutated only through
//! the four transitions below, which `state::store::AuthStore` drives together
//! with persistence and the bearer credential.
//!
//! INVARIANTS
//! ==========
//! - `is_authenticated` implies both token and user are present.
//! - `is_loading` implies `!is_loaded`.
//! - `error.is_error` implies no token, no user, and `!is_authenticated`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthResponse, ErrorMessage, Role, User};

/// Error slot shown by the auth modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthErrorState {
    pub is_error: bool,
    pub message: Option<ErrorMessage>,
}

/// Coarse phase derived from the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

/// Authentication state tracking the session, request flags, and last error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    access_token: Option<String>,
    user: Option<User>,
    is_authenticated: bool,
    is_loading: bool,
    is_loaded: bool,
    error: AuthErrorState,
}

impl AuthState {
    /// Startup state seeded from the persisted record, not yet authenticated.
    pub fn seeded(record: Option<AuthResponse>) -> Self {
        let (access_token, user) = match record {
            Some(record) => (Some(record.access_token), Some(record.user)),
            None => (None, None),
        };
        Self { access_token, user, ..Self::default() }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn error(&self) -> &AuthErrorState {
        &self.error
    }

    /// Authenticated and holding `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.is_authenticated && self.user.as_ref().is_some_and(|u| u.role == role)
    }

    /// A seeded session is waiting for its first restore attempt.
    pub fn restore_pending(&self) -> bool {
        self.access_token.is_some() && !self.is_authenticated && !self.is_loading && !self.is_loaded
    }

    pub fn phase(&self) -> AuthPhase {
        if self.is_loading {
            AuthPhase::Requesting
        } else if !self.is_loaded {
            AuthPhase::Idle
        } else if self.error.is_error {
            AuthPhase::Failed
        } else {
            AuthPhase::Succeeded
        }
    }

    /// Any state -> `Requesting`.
    pub(crate) fn request(&mut self) {
        self.error = AuthErrorState::default();
        self.is_loading = true;
        self.is_loaded = false;
    }

    /// `Requesting` -> `Succeeded`.
    pub(crate) fn succeed(&mut self, payload: AuthResponse) {
        self.access_token = Some(payload.access_token);
        self.user = Some(payload.user);
        self.is_authenticated = true;
        self.is_loading = false;
        self.is_loaded = true;
        self.error = AuthErrorState::default();
    }

    /// `Requesting` -> `Failed`.
    pub(crate) fn fail(&mut self, message: Option<ErrorMessage>) {
        self.access_token = None;
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.is_loaded = true;
        self.error = AuthErrorState { is_error: true, message };
    }

    /// Any state -> `Idle` with nothing held.
    pub(crate) fn logout(&mut self) {
        *self = Self::default();
    }
}
