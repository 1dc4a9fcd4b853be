//! Tasks Page
//!
//! Owns the board store for its lifetime. The list is refetched whenever the
//! committed query changes; the search box feeds the query through a debounce.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_debounce::timeout;
use reactive_stores::Store;

use crate::components::{ConfirmModal, ErrorDisplay, Filters, PaginationBar, TaskModal, TaskTable};
use crate::context::AppContext;
use crate::mutation::MutationStatus;
use crate::store::{confirm_delete, watch_query, watch_search, BoardStore, TaskBoard, TaskBoardStoreFields};

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = ctx.config();
    let board: BoardStore = Store::new(TaskBoard::new(config.page_size));
    provide_context(board);

    watch_query(board, ctx.tasks_api(), ctx.session);
    watch_search(board, timeout(config.search_debounce_ms));

    let delete_open = Signal::derive(move || board.delete().with(|d| d.target().is_some()));
    let delete_message = Signal::derive(move || {
        board
            .delete()
            .with(|d| d.target().map(|task| format!("Delete \"{}\"? This cannot be undone.", task.title)))
            .unwrap_or_default()
    });
    let deleting = Signal::derive(move || board.mutation().with(MutationStatus::is_submitting));

    view! {
        <section class="tasks-page">
            <h1>"Tasks"</h1>
            <Filters />
            <ErrorDisplay />
            <TaskTable />
            <PaginationBar />
            <TaskModal />
            <ConfirmModal
                open=delete_open
                title="Delete task"
                message=delete_message
                busy=deleting
                on_confirm=move |_| {
                    let api = ctx.tasks_api();
                    spawn_local(async move {
                        confirm_delete(api.as_ref(), board).await;
                    });
                }
                on_cancel=move |_| board.update(TaskBoard::cancel_delete)
            />
        </section>
    }
}
