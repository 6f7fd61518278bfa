//! Login/register modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by the header in a chosen mode. Form values live in a local signal
//! created per open; loading and error state are read from the shared auth
//! store. Only one submit may be in flight: the submit button is disabled
//! while loading, and the handler re-checks before dispatching.
//!
//! The error list is shown only after a submit from this modal, so a stale
//! failure from an earlier attempt does not greet a freshly opened form.

#[cfg(test)]
#[path = "auth_modal_test.rs"]
mod auth_modal_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::net::api::AppApi;
use crate::state::actions::can_submit;
use crate::state::auth::AuthState;
use crate::state::form::{AuthForm, AuthMode};
use crate::state::store::AppStore;

/// Pause after a successful submit so the success mark renders before close.
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_millis(500);

/// Submit button caption for the current request state.
pub fn submit_label(loading: bool, succeeded: bool) -> &'static str {
    if succeeded {
        "✓"
    } else if loading {
        "submitting"
    } else {
        "submit"
    }
}

/// Error lines to render, one bullet each.
pub fn visible_errors(attempted: bool, state: &AuthState) -> Vec<String> {
    let error = state.error();
    if !attempted || !error.is_error {
        return Vec::new();
    }
    error
        .message
        .as_ref()
        .map(|message| message.lines().into_iter().map(str::to_owned).collect())
        .unwrap_or_default()
}

#[component]
pub fn AuthModal(mode: AuthMode, on_close: Callback<()>) -> impl IntoView {
    let store = expect_context::<AppStore>();
    let api = expect_context::<AppApi>();

    let form = RwSignal::new(AuthForm::new(mode));
    let attempted = RwSignal::new(false);
    let succeeded = RwSignal::new(false);

    // Field inputs re-render on mode change only, not on every keystroke.
    let current_mode = Memo::new(move |_| form.with(|f| f.mode));
    let loading = move || store.with(|s| s.state().is_loading());
    let errors = move || store.with(|s| visible_errors(attempted.get(), s.state()));

    let try_close = move || {
        if store.with_untracked(|s| can_submit(s.state())) {
            on_close.run(());
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            try_close();
        }
    };
    let on_switch = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if store.with_untracked(|s| can_submit(s.state())) {
            form.update(AuthForm::switch_mode);
            attempted.set(false);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !store.with_untracked(|s| can_submit(s.state())) {
            return;
        }
        attempted.set(true);
        succeeded.set(false);
        let action = form.with_untracked(AuthForm::action);

        #[cfg(feature = "hydrate")]
        {
            let pending = crate::state::actions::dispatch(api.clone(), store, action, move || {
                form.update(AuthForm::clear);
                succeeded.set(true);
            });
            leptos::task::spawn_local(async move {
                if pending.await.is_authenticated() {
                    gloo_timers::future::sleep(SUCCESS_CLOSE_DELAY).await;
                    on_close.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, action);
    };

    view! {
        <div class="auth-modal__backdrop">
            <div class="auth-modal" on:keydown=on_keydown tabindex="0">
                <div class="auth-modal__header">
                    <h2 class="auth-modal__title">{move || current_mode.get().title()}</h2>
                    <button
                        class="auth-modal__close"
                        title="Close"
                        disabled=loading
                        on:click=move |_| try_close()
                    >
                        "✕"
                    </button>
                </div>
                <form class="auth-modal__form" on:submit=on_submit>
                    {move || {
                        current_mode
                            .get()
                            .fields()
                            .iter()
                            .map(|field| {
                                let id = field.id;
                                view! {
                                    <input
                                        class="auth-modal__input"
                                        id=id.as_str()
                                        name=id.as_str()
                                        type=field.input_type
                                        placeholder=field.placeholder
                                        prop:value=move || form.with(|f| f.value(id).to_owned())
                                        on:input=move |ev| form.update(|f| f.set(id, event_target_value(&ev)))
                                    />
                                }
                            })
                            .collect_view()
                    }}
                    <button class="auth-modal__submit" type="submit" disabled=loading>
                        {move || submit_label(loading(), succeeded.get())}
                    </button>
                </form>
                <Show when=move || !errors().is_empty()>
                    <ul class="auth-modal__errors">
                        {move || {
                            errors()
                                .into_iter()
                                .map(|line| view! { <li class="auth-modal__error">{line}</li> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
                <p class="auth-modal__switch">
                    {move || current_mode.get().switch_prompt()}
                    " "
                    <button class="auth-modal__switch-button" disabled=loading on:click=on_switch>
                        {move || current_mode.get().switch_label()}
                    </button>
                </p>
            </div>
        </div>
    }
}
