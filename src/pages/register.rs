//! Register Page

use leptos::prelude::*;

use crate::components::SignUpForm;
use crate::context::AppContext;
use crate::router::Route;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let router = ctx.router;

    view! {
        <section class="auth-page">
            <h1>"Create an account"</h1>
            <SignUpForm />
            <p class="auth-switch">
                "Already registered? "
                <a
                    href=Route::Home.path()
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        router.navigate(Route::Home);
                    }
                >
                    "Sign in"
                </a>
            </p>
        </section>
    }
}
