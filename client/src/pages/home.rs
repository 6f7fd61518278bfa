//! Public landing page.

use leptos::prelude::*;

use crate::state::store::AppStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let greeting = move || {
        store.with(|s| match s.state().user() {
            Some(user) if s.state().is_authenticated() => format!("Signed in as {}.", user.username),
            _ => "Register or log in to reach your dashboard.".to_owned(),
        })
    };

    view! {
        <section class="home-page">
            <h1>"Home"</h1>
            <p class="home-page__greeting">{greeting}</p>
        </section>
    }
}
