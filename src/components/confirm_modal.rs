//! Confirm Modal Component
//!
//! Modal yes/no dialog for destructive actions.

use leptos::prelude::*;

/// Confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `busy` - Disables the confirm button while the action runs
/// * `on_confirm` - Runs when the user confirms
/// * `on_cancel` - Runs on the cancel button or a click outside the dialog
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal confirm-modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <h2>{title.clone()}</h2>
                    <p>{move || message.get()}</p>
                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="confirm-btn"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
