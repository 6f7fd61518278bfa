//! Dashboard for any signed-in user.

use leptos::prelude::*;

use crate::components::guards::RequireAuthenticated;
use crate::state::store::AppStore;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let name = move || store.with(|s| s.state().user().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <RequireAuthenticated>
            <section class="dashboard">
                <h1>"User Dashboard"</h1>
                <p class="dashboard__welcome">"Welcome, " {name} "."</p>
            </section>
        </RequireAuthenticated>
    }
}
