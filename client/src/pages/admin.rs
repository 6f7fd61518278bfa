//! Dashboard restricted to administrators.

use leptos::prelude::*;

use crate::components::guards::RequireRole;
use crate::net::types::Role;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Admin>
            <section class="dashboard dashboard--admin">
                <h1>"Admin Dashboard"</h1>
            </section>
        </RequireRole>
    }
}
