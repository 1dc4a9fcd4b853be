//! Application Context
//!
//! Services shared by every view, provided via the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::commands::TaskApi;
use crate::config::AppConfig;
use crate::router::Router;
use crate::session::SessionStore;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current user and session operations
    pub session: SessionStore,
    /// Current route and navigation
    pub router: Router,
    tasks_api: StoredValue<Arc<dyn TaskApi>>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(session: SessionStore, router: Router, tasks_api: Arc<dyn TaskApi>, config: AppConfig) -> Self {
        Self {
            session,
            router,
            tasks_api: StoredValue::new(tasks_api),
            config: StoredValue::new(config),
        }
    }

    pub fn tasks_api(&self) -> Arc<dyn TaskApi> {
        self.tasks_api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}
