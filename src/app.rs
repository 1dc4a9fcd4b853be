//! Taskboard App
//!
//! Root component: builds the shared services, probes the session once and
//! renders the page for the current route.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpClient;
use crate::components::{AuthGuard, Header};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{HomePage, RegisterPage, TasksPage};
use crate::router::{Route, Router};
use crate::session::SessionStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("starting taskboard against {}", config.api_base_url);
    let client = Arc::new(HttpClient::new(&config.api_base_url));
    let session = SessionStore::new(client.clone());
    let router = Router::from_location();
    router.listen_popstate();

    // Provide context to all children
    provide_context(AppContext::new(session, router, client, config));

    // Identity probe on mount
    spawn_local(session.probe());

    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {move || match router.current() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Register => view! { <RegisterPage /> }.into_any(),
                    Route::Tasks => view! {
                        <AuthGuard>
                            <TasksPage />
                        </AuthGuard>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
