//! Leptos Debounce Utilities
//!
//! Commit a reactive value only after it has stopped changing for a quiet period.
//! Every change re-arms a gate; a pending timer only fires its callback if its
//! ticket is still the latest one when it wakes up.

use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ticket handed out by [`DebounceGate::arm`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks which pending timer is allowed to fire
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    latest: Arc<AtomicU64>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new quiet period, superseding every earlier ticket.
    pub fn arm(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the most recently armed one.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidate all outstanding tickets without arming a new one.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// Browser timer for [`use_debounce`]: each call waits `delay_ms`.
pub fn timeout(delay_ms: u32) -> impl Fn() -> TimeoutFuture + 'static {
    move || TimeoutFuture::new(delay_ms)
}

/// Call `on_settle` with the value of `source` once it has been stable for one
/// `quiet_period` (a future factory, usually [`timeout`]).
///
/// Intermediate values never reach the callback. The returned gate can be
/// cancelled to drop a pending commit (e.g. when the view is torn down).
pub fn use_debounce<T, S, F>(
    source: impl Into<Signal<T>>,
    quiet_period: S,
    on_settle: impl Fn(T) + 'static,
) -> DebounceGate
where
    T: Clone + Send + Sync + 'static,
    S: Fn() -> F + 'static,
    F: Future<Output = ()> + 'static,
{
    let source = source.into();
    let gate = DebounceGate::new();
    let on_settle = Rc::new(on_settle);

    let effect_gate = gate.clone();
    Effect::new(move |_| {
        let value = source.get();
        let ticket = effect_gate.arm();
        let gate = effect_gate.clone();
        let on_settle = Rc::clone(&on_settle);
        let wait = quiet_period();
        spawn_local(async move {
            wait.await;
            if gate.is_latest(ticket) {
                on_settle(value);
            }
        });
    });

    on_cleanup({
        let gate = gate.clone();
        move || gate.cancel()
    });

    gate
}
