//! Route guards wrapping protected page content.
//!
//! Children render only while the rule allows access. Until then a neutral
//! placeholder is shown, and a redirect home is issued once the store settles
//! without granting access.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::store::AppStore;
use crate::util::auth::{AccessRule, GuardDecision, install_guard_redirect};

/// Require a signed-in user.
#[component]
pub fn RequireAuthenticated(children: ChildrenFn) -> impl IntoView {
    guarded(AccessRule::Authenticated, children)
}

/// Require a signed-in user with `role`.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    guarded(AccessRule::Role(role), children)
}

fn guarded(rule: AccessRule, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<AppStore>();
    install_guard_redirect(store, rule, use_navigate());

    move || match store.with(|s| rule.decide(s.state())) {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Wait | GuardDecision::Redirect => {
            view! { <p class="guard__status">"Checking session..."</p> }.into_any()
        }
    }
}
