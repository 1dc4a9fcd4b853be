//! Auth Guard Component
//!
//! Renders protected content only for a signed-in user.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::router::{guard, GuardDecision};

/// Shows a placeholder while the session is unknown and sends anonymous
/// visitors to the landing page.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = ctx.session;
    let router = ctx.router;

    let decision = Memo::new(move |_| guard(&session.state()));

    Effect::new(move |_| {
        if let GuardDecision::Redirect(route) = decision.get() {
            router.redirect(route);
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <div class="loading-placeholder">"Loading..."</div> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
