//! Task Table Component
//!
//! Current page of tasks with per-row edit and delete actions.

use leptos::prelude::*;

use crate::models::Task;
use crate::mutation::MutationStatus;
use crate::store::{use_board, TaskBoard, TaskBoardStoreFields};

#[component]
pub fn TaskTable() -> impl IntoView {
    let board = use_board();
    let loading = move || board.loading().get();
    let busy = move || loading() || board.mutation().with(MutationStatus::is_submitting);
    let tasks = move || board.with(TaskBoard::tasks);

    view! {
        <Show
            when=move || !loading()
            fallback=|| view! {
                <div class="loading-container">
                    <div class="loading-spinner"></div>
                </div>
            }
        >
            <Show
                when=move || !tasks().is_empty()
                fallback=|| view! { <p class="empty-state">"No tasks found"</p> }
            >
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Title"</th>
                            <th>"Description"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        // Keyed on content so an edited row re-renders
                        <For
                            each=tasks
                            key=|task| (task.id, task.title.clone(), task.description.clone(), task.is_done)
                            children=move |task: Task| view! { <TaskRow task busy /> }
                        />
                    </tbody>
                </table>
            </Show>
        </Show>
    }
}

#[component]
fn TaskRow(task: Task, busy: impl Fn() -> bool + Copy + Send + Sync + 'static) -> impl IntoView {
    let board = use_board();
    let status_class = if task.is_done { "status status-done" } else { "status status-open" };
    let status_label = if task.is_done { "Done" } else { "Not done" };
    let created = task.created_label();
    let edit_target = task.clone();
    let delete_target = task.clone();

    view! {
        <tr>
            <td>{task.id}</td>
            <td class="task-title">{task.title}</td>
            <td class="task-description">{task.description}</td>
            <td><span class=status_class>{status_label}</span></td>
            <td>{created}</td>
            <td class="actions">
                <button
                    class="edit-btn"
                    disabled=busy
                    on:click=move |_| board.update(|b| b.open_edit(edit_target.clone()))
                >
                    "Edit"
                </button>
                <button
                    class="delete-btn"
                    disabled=busy
                    on:click=move |_| board.update(|b| b.request_delete(delete_target.clone()))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
