//! Pagination Bar Component

use leptos::prelude::*;

use crate::store::{use_board, TaskBoard, TaskBoardStoreFields};

/// Previous/next controls. Hidden when everything fits on one page.
#[component]
pub fn PaginationBar() -> impl IntoView {
    let board = use_board();
    let window = Memo::new(move |_| board.with(TaskBoard::page_window));
    let loading = move || board.loading().get();

    view! {
        <Show when=move || !window.get().is_hidden()>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || window.get().prev_disabled() || loading()
                    on:click=move |_| board.update(|b| {
                        b.prev_page();
                    })
                >
                    "Previous"
                </button>
                <span class="page-label">{move || window.get().label()}</span>
                <button
                    class="page-btn"
                    disabled=move || window.get().next_disabled() || loading()
                    on:click=move |_| board.update(|b| {
                        b.next_page();
                    })
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
