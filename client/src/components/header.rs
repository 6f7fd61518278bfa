//! Site header with auth entry points and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors see register/login buttons that open the auth modal.
//! Signed-in users see a dashboard link, an admin link when their role is
//! `admin`, and a logout button. The same menu is repeated in a side panel
//! for narrow screens.

use leptos::prelude::*;

use super::auth_modal::AuthModal;
use crate::net::types::Role;
use crate::state::form::AuthMode;
use crate::state::store::AppStore;

#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let modal = RwSignal::new(None::<AuthMode>);
    let side_open = RwSignal::new(false);

    let on_open = Callback::new(move |mode: AuthMode| {
        side_open.set(false);
        modal.set(Some(mode));
    });
    let on_logout = Callback::new(move |()| {
        side_open.set(false);
        store.update(|s| s.logout());
    });
    let on_navigate = Callback::new(move |()| side_open.set(false));
    let on_close = Callback::new(move |()| modal.set(None));

    view! {
        <nav class="site-header">
            <a class="site-header__brand" href="/" on:click=move |_| side_open.set(false)>
                <h1>"Blog App"</h1>
            </a>
            <HeaderMenu list_class="site-header__menu" on_open=on_open on_logout=on_logout on_navigate=on_navigate/>
            <button
                class="site-header__menu-toggle"
                title="Menu"
                on:click=move |_| side_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <Show when=move || side_open.get()>
                <div class="site-header__side-menu">
                    <button class="site-header__side-close" title="Close menu" on:click=move |_| side_open.set(false)>
                        "✕"
                    </button>
                    <HeaderMenu list_class="site-header__side-list" on_open=on_open on_logout=on_logout on_navigate=on_navigate/>
                </div>
            </Show>
            {move || modal.get().map(|mode| view! { <AuthModal mode=mode on_close=on_close/> })}
        </nav>
    }
}

#[component]
fn HeaderMenu(
    list_class: &'static str,
    on_open: Callback<AuthMode>,
    on_logout: Callback<()>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    let store = expect_context::<AppStore>();
    let signed_in = move || store.with(|s| s.state().is_authenticated());
    let is_admin = move || store.with(|s| s.state().has_role(Role::Admin));

    view! {
        <ul class=list_class>
            <Show
                when=signed_in
                fallback=move || {
                    view! {
                        <li>
                            <button class="site-header__button" on:click=move |_| on_open.run(AuthMode::Register)>
                                "Register"
                            </button>
                        </li>
                        <li>
                            <button class="site-header__button" on:click=move |_| on_open.run(AuthMode::Login)>
                                "Login"
                            </button>
                        </li>
                    }
                }
            >
                <li>
                    <a class="site-header__link" href="/user" on:click=move |_| on_navigate.run(())>"Dashboard"</a>
                </li>
                <Show when=is_admin>
                    <li>
                        <a class="site-header__link" href="/admin" on:click=move |_| on_navigate.run(())>"Admin"</a>
                    </li>
                </Show>
                <li>
                    <button class="site-header__button" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </li>
            </Show>
        </ul>
    }
}
