//! Header Component
//!
//! Signed-in user and the logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::router::Route;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = ctx.session;
    let router = ctx.router;
    let (logout_error, set_logout_error) = signal::<Option<String>>(None);

    let logout = move |_: web_sys::MouseEvent| {
        set_logout_error.set(None);
        spawn_local(async move {
            match session.logout().await {
                Ok(()) => router.navigate(Route::Home),
                Err(error) => set_logout_error.set(Some(error.form_message())),
            }
        });
    };

    view! {
        <header class="app-header">
            <Show when=move || !session.is_loading() && session.user().is_some()>
                <span class="user-email">{move || session.user().map(|u| u.email).unwrap_or_default()}</span>
                <button class="logout-btn" on:click=logout>"Log out"</button>
            </Show>
            {move || logout_error.get().map(|message| view! { <span class="header-error">{message}</span> })}
        </header>
    }
}
