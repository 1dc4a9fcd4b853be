//! Login Form Component
//!
//! Two-stage sign-in: email first, then the password once the email is valid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FieldErrorText;
use crate::context::AppContext;
use crate::forms::{LoginForm, LoginStage, LoginStep};
use crate::router::Route;
use crate::validation::fields;

#[component]
pub fn AuthForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = ctx.session;
    let router = ctx.router;
    let form = RwSignal::new(LoginForm::default());

    let password_stage = move || form.with(|f| f.stage == LoginStage::Password);
    let field_error = move |field: &'static str| Signal::derive(move || form.with(|f| f.errors.message(field)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let step = form.try_update(LoginForm::submit).unwrap_or(LoginStep::Stay);
        let LoginStep::Submit(credentials) = step else {
            return;
        };
        spawn_local(async move {
            match session.login(&credentials.email, &credentials.password).await {
                Ok(()) => router.navigate(Route::Tasks),
                Err(error) => form.update(|f| f.reject(&error)),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                type="email"
                placeholder="Email"
                autocomplete="email"
                disabled=move || session.is_loading()
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
            />
            <FieldErrorText message=field_error(fields::EMAIL) />
            <Show when=password_stage>
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    disabled=move || session.is_loading()
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                />
                <FieldErrorText message=field_error(fields::PASSWORD) />
            </Show>
            <button type="submit" class="primary-btn" disabled=move || session.is_loading()>
                {move || if password_stage() { "Sign in" } else { "Continue" }}
            </button>
        </form>
    }
}
