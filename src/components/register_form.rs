//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FieldErrorText;
use crate::context::AppContext;
use crate::forms::RegisterForm;
use crate::router::Route;
use crate::validation::fields;

/// Account creation. On success the user is sent back to sign in.
#[component]
pub fn SignUpForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = ctx.session;
    let router = ctx.router;
    let form = RwSignal::new(RegisterForm::default());

    let field_error = move |field: &'static str| Signal::derive(move || form.with(|f| f.errors.message(field)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(registration) = form.try_update(RegisterForm::submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = session
                .register(&registration.email, &registration.password, &registration.password_confirm)
                .await;
            match result {
                Ok(()) => router.navigate(Route::Home),
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
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| {
                    f.email = event_target_value(&ev);
                    f.errors.remove(fields::EMAIL);
                })
            />
            <FieldErrorText message=field_error(fields::EMAIL) />
            <input
                type="password"
                placeholder="Password"
                autocomplete="new-password"
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| {
                    f.password = event_target_value(&ev);
                    f.errors.remove(fields::PASSWORD);
                })
            />
            <FieldErrorText message=field_error(fields::PASSWORD) />
            <input
                type="password"
                placeholder="Confirm password"
                autocomplete="new-password"
                prop:value=move || form.with(|f| f.password_confirm.clone())
                on:input=move |ev| form.update(|f| {
                    f.password_confirm = event_target_value(&ev);
                    f.errors.remove(fields::PASSWORD_CONFIRM);
                })
            />
            <FieldErrorText message=field_error(fields::PASSWORD_CONFIRM) />
            <button type="submit" class="primary-btn" disabled=move || session.is_loading()>
                "Create account"
            </button>
        </form>
    }
}
