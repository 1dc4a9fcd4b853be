//! Session Store
//!
//! Who is signed in. The state starts `Unknown`, becomes `Authenticated` or
//! `Anonymous` once the identity probe resolves, and is only ever replaced as a
//! whole. All mutation goes through the `SessionStore` operations.

use std::sync::Arc;

use leptos::prelude::*;

use crate::commands::{ApiResult, AuthApi};
use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Initial probe has not resolved yet
    #[default]
    Unknown,
    Authenticated(User),
    Anonymous,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub state: SessionState,
    probing: bool,
    calls_in_flight: u32,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True during the initial probe or any in-flight session call
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Unknown || self.probing || self.calls_in_flight > 0
    }

    /// Returns false if a probe is already outstanding.
    pub fn begin_probe(&mut self) -> bool {
        if self.probing {
            return false;
        }
        self.probing = true;
        true
    }

    pub fn finish_probe(&mut self, result: ApiResult<User>) {
        self.probing = false;
        self.state = match result {
            Ok(user) => SessionState::Authenticated(user),
            Err(error) => {
                log::warn!("session probe failed, treating as anonymous: {}", error);
                SessionState::Anonymous
            }
        };
    }

    pub fn begin_call(&mut self) {
        self.calls_in_flight += 1;
    }

    pub fn end_call(&mut self) {
        self.calls_in_flight = self.calls_in_flight.saturating_sub(1);
    }

    pub fn sign_out(&mut self) {
        self.state = SessionState::Anonymous;
    }
}

/// Session service provided to views through `AppContext`
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    api: StoredValue<Arc<dyn AuthApi>>,
}

impl SessionStore {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            api: StoredValue::new(api),
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn state(&self) -> SessionState {
        self.session.with(|s| s.state.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(Session::is_loading)
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    // ========================
    // Operations
    // ========================

    /// Ask the server who we are. Any failure means anonymous.
    pub async fn probe(self) {
        let started = self.session.try_update(Session::begin_probe).unwrap_or(false);
        if !started {
            log::debug!("identity probe already in flight");
            return;
        }
        let result = self.api.get_value().probe_identity().await;
        self.session.update(|s| s.finish_probe(result));
    }

    /// On success the identity comes from a fresh probe, never from the form.
    pub async fn login(self, email: &str, password: &str) -> ApiResult<()> {
        let result = self.call(|api| async move { api.login(email, password).await }).await;
        match result {
            Ok(()) => {
                log::info!("signed in as {}", email);
                self.probe().await;
                Ok(())
            }
            Err(error) => {
                log::info!("login rejected: {}", error);
                Err(error)
            }
        }
    }

    /// Creates the account only; the user still has to log in.
    pub async fn register(self, email: &str, password: &str, password_confirm: &str) -> ApiResult<()> {
        let result = self
            .call(|api| async move { api.register(email, password, password_confirm).await })
            .await;
        if let Err(error) = &result {
            log::info!("registration rejected: {}", error);
        }
        result
    }

    pub async fn logout(self) -> ApiResult<()> {
        let result = self.call(|api| async move { api.logout().await }).await;
        match &result {
            Ok(()) => self.session.update(Session::sign_out),
            Err(error) => log::error!("logout failed: {}", error),
        }
        result
    }

    /// Rotate the session cookie and re-read the identity.
    pub async fn refresh(self) -> ApiResult<()> {
        let result = self.call(|api| async move { api.refresh().await }).await;
        match &result {
            Ok(()) => self.probe().await,
            Err(error) => log::warn!("session refresh failed: {}", error),
        }
        result
    }

    /// Run one session call with the loading flag raised.
    async fn call<F, Fut>(self, f: F) -> ApiResult<()>
    where
        F: FnOnce(Arc<dyn AuthApi>) -> Fut,
        Fut: std::future::Future<Output = ApiResult<()>>,
    {
        self.session.update(Session::begin_call);
        let result = f(self.api.get_value()).await;
        self.session.update(Session::end_call);
        result
    }
}
