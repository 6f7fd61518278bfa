//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::api::{ApiClient, AppApi, GlooTransport};
use crate::pages::{admin::AdminDashboardPage, home::HomePage, user::UserDashboardPage};
use crate::state::store::{AppStore, AuthStore};
use crate::util::config::AppConfig;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client and auth store, seeded from local storage, and
/// starts a silent session restore when a stored token exists.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let api: AppApi = ApiClient::new(config.api_base_url, GlooTransport);
    let store: AppStore = RwSignal::new(AuthStore::open(LocalStorage));

    provide_context(api.clone());
    provide_context(store);
    start_session_restore(api, store);

    view! {
        <Stylesheet id="leptos" href="/pkg/blog.css"/>
        <Title text="Blog App"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("user") view=UserDashboardPage/>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

fn start_session_restore(api: AppApi, store: AppStore) {
    if !store.with_untracked(|s| s.state().restore_pending()) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        use crate::state::actions::{AuthAction, dispatch};

        let pending = dispatch(api, store, AuthAction::restore_session(), || {});
        leptos::task::spawn_local(async move {
            let _ = pending.await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = api;
}
