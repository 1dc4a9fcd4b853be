//! Field Error Text
//!
//! Inline validation message shown under a form input.

use leptos::prelude::*;

#[component]
pub fn FieldErrorText(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="field-error">{text}</p> })
}
