//! Routing
//!
//! The three application routes, kept in sync with the browser history, and
//! the guard deciding what a protected route may render.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public landing page with the login form
    Home,
    Register,
    /// Task board, requires a session
    Tasks,
}

impl Route {
    /// Unknown paths land on the home page
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/register" => Route::Register,
            "/tasks" => Route::Tasks,
            _ => Route::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Register => "/register",
            Route::Tasks => "/tasks",
        }
    }
}

/// What a guarded route renders for a given session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Redirect(Route),
    Render,
}

pub fn guard(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Unknown => GuardDecision::Loading,
        SessionState::Anonymous => GuardDecision::Redirect(Route::Home),
        SessionState::Authenticated(_) => GuardDecision::Render,
    }
}

/// Current route signal plus History API navigation
#[derive(Clone, Copy)]
pub struct Router {
    current: RwSignal<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            current: RwSignal::new(initial),
        }
    }

    /// Start at whatever path the browser loaded
    pub fn from_location() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::new(Route::from_path(&path))
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// Push a history entry and switch the view
    pub fn navigate(&self, route: Route) {
        self.go(route, false);
    }

    /// Replace the current history entry (redirects)
    pub fn redirect(&self, route: Route) {
        self.go(route, true);
    }

    fn go(&self, route: Route, replace: bool) {
        if self.current.get_untracked() == route {
            return;
        }
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let result = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
            };
            if let Err(e) = result {
                log::warn!("history update failed: {:?}", e);
            }
        }
        log::debug!("navigate -> {}", route.path());
        self.current.set(route);
    }

    /// Follow back/forward buttons. Call once at startup.
    pub fn listen_popstate(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let current = self.current;
        let on_pop = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_: web_sys::PopStateEvent| {
            let path = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            current.set(Route::from_path(&path));
        });
        if let Err(e) = window.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref()) {
            log::warn!("could not listen to popstate: {:?}", e);
        }
        // The listener lives as long as the page
        on_pop.forget();
    }
}
