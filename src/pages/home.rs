//! Home Page
//!
//! Landing page with the login form. Signed-in users go straight to their tasks.

use leptos::prelude::*;

use crate::components::AuthForm;
use crate::context::AppContext;
use crate::router::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = ctx.session;
    let router = ctx.router;

    Effect::new(move |_| {
        if session.user().is_some() {
            router.redirect(Route::Tasks);
        }
    });

    view! {
        <section class="auth-page">
            <h1>"Sign in"</h1>
            <AuthForm />
            <p class="auth-switch">
                "No account yet? "
                <a
                    href=Route::Register.path()
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        router.navigate(Route::Register);
                    }
                >
                    "Register"
                </a>
            </p>
        </section>
    }
}
