//! Auth actions: login, register, and silent session restore.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal and the app root build an [`AuthAction`] and hand it to
//! [`dispatch`]. Dispatch marks the store as requesting before it returns, so
//! `is_loading` is visible for the whole call and a second submit can be
//! refused synchronously. The returned future performs exactly one HTTP call
//! and settles the store with the result.
//!
//! ERROR HANDLING
//! ==============
//! A backend `message` is surfaced verbatim, anything else falls back to the
//! transport error's description, and restore failures stay silent. There
//! are no retries.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::future::Future;

use super::auth::AuthState;
use super::store::StoreHandle;
use crate::net::api::{ApiClient, ApiError, Transport};
use crate::net::types::{AuthResponse, ErrorMessage, LoginCredentials, RegisterFields};
use crate::util::storage::KeyValueStore;

/// One-shot auth intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login(LoginCredentials),
    Register(RegisterFields),
    RestoreSession,
}

impl AuthAction {
    pub fn login(credentials: LoginCredentials) -> Self {
        Self::Login(credentials)
    }

    pub fn register(fields: RegisterFields) -> Self {
        Self::Register(fields)
    }

    pub fn restore_session() -> Self {
        Self::RestoreSession
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::Register(_) => "register",
            Self::RestoreSession => "restore",
        }
    }

    /// Silent actions never surface an error message.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::RestoreSession)
    }

    async fn perform<T: Transport>(&self, api: &ApiClient<T>, bearer: Option<&str>) -> Result<AuthResponse, ApiError> {
        match self {
            Self::Login(credentials) => api.login(credentials, bearer).await,
            Self::Register(fields) => api.register(fields, bearer).await,
            Self::RestoreSession => api.current_user(bearer).await,
        }
    }

    /// Classify an API error for this action.
    pub fn failure(&self, error: ApiError) -> AuthFailure {
        if self.is_silent() {
            return AuthFailure::SilentRestore;
        }
        match error {
            ApiError::Http { message: Some(message), .. } => AuthFailure::Rejected(message),
            other => AuthFailure::Transport(other.to_string()),
        }
    }
}

/// Why an auth action did not authenticate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// The backend rejected the request with one or more messages.
    #[error("{0}")]
    Rejected(ErrorMessage),

    /// No usable response; carries the transport error description.
    #[error("{0}")]
    Transport(String),

    /// Session restore failed. Never shown to the user.
    #[error("session restore failed")]
    SilentRestore,
}

impl AuthFailure {
    /// Message stored in the error slot.
    pub fn message(&self) -> Option<ErrorMessage> {
        match self {
            Self::Rejected(message) => Some(message.clone()),
            Self::Transport(description) => Some(ErrorMessage::Text(description.clone())),
            Self::SilentRestore => None,
        }
    }
}

/// How a dispatched action ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    Failed(AuthFailure),
    /// A logout or newer request retired this one; nothing was applied.
    Superseded,
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Whether a new submit may start. Only one request may be in flight.
pub fn can_submit(state: &AuthState) -> bool {
    !state.is_loading()
}

/// Start `action` against `store` and return the future that completes it.
///
/// The store enters `Requesting` before this function returns. On success the
/// record is persisted, the bearer credential updated, and `on_success` runs
/// after the state change. Stale results are dropped and `on_success` is not
/// called.
pub fn dispatch<T, S, H, F>(
    api: ApiClient<T>,
    store: H,
    action: AuthAction,
    on_success: F,
) -> impl Future<Output = AuthOutcome>
where
    T: Transport,
    S: KeyValueStore,
    H: StoreHandle<S>,
    F: FnOnce(),
{
    let started = store.with_store(|s| (s.request(), s.bearer().map(str::to_owned)));
    async move {
        let Some((ticket, bearer)) = started else {
            return AuthOutcome::Superseded;
        };
        log::debug!("dispatching {} action", action.name());

        match action.perform(&api, bearer.as_deref()).await {
            Ok(payload) => {
                if store.with_store(|s| s.succeed(ticket, payload)).unwrap_or(false) {
                    on_success();
                    AuthOutcome::Authenticated
                } else {
                    AuthOutcome::Superseded
                }
            }
            Err(error) => {
                log::info!("{} action failed: {error}", action.name());
                let failure = action.failure(error);
                let message = failure.message();
                if store.with_store(|s| s.fail(ticket, message)).unwrap_or(false) {
                    AuthOutcome::Failed(failure)
                } else {
                    AuthOutcome::Superseded
                }
            }
        }
    }
}
