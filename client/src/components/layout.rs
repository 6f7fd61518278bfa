//! Page frame: header, routed content, footer.

use leptos::prelude::*;

use super::header::Header;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header/>
            <main class="layout__content">{children()}</main>
            <footer class="layout__footer">
                <p>"Blog App"</p>
            </footer>
        </div>
    }
}
