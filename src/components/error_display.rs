//! Error Display Component
//!
//! Banner listing the board's current error messages.

use leptos::prelude::*;

use crate::store::{use_board, TaskBoardStoreFields};

#[component]
pub fn ErrorDisplay() -> impl IntoView {
    let board = use_board();
    let errors = move || board.errors().get();

    view! {
        <Show when=move || !errors().is_empty()>
            <div class="error-display" role="alert">
                {move || errors().into_iter().map(|message| view! { <p>{message}</p> }).collect_view()}
            </div>
        </Show>
    }
}
