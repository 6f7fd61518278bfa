//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical redirect behavior: the rule is checked on
//! every auth-state change, not only on mount, so logging out while a
//! protected view is open sends the user home on the next render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::store::AppStore;

/// Where guards send rejected visitors.
pub const HOME_PATH: &str = "/";

/// Access requirement for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessRule {
    Authenticated,
    Role(Role),
}

/// What a guard should do for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// A request is in flight or a seeded session has not been restored yet.
    Wait,
    Redirect,
}

impl AccessRule {
    pub fn allows(self, state: &AuthState) -> bool {
        match self {
            Self::Authenticated => state.is_authenticated(),
            Self::Role(role) => state.has_role(role),
        }
    }

    pub fn decide(self, state: &AuthState) -> GuardDecision {
        if self.allows(state) {
            GuardDecision::Allow
        } else if state.is_loading() || state.restore_pending() {
            GuardDecision::Wait
        } else {
            GuardDecision::Redirect
        }
    }
}

/// Navigate home (replacing history) whenever `rule` resolves to a redirect.
pub fn install_guard_redirect<F>(store: AppStore, rule: AccessRule, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = store.with(|s| rule.decide(s.state()));
        if decision == GuardDecision::Redirect {
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
