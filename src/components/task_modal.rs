//! Task Modal Component
//!
//! Create/edit form for a single task. Validates locally before anything is
//! sent; while a save is in flight the submit button stays disabled.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FieldErrorText;
use crate::context::AppContext;
use crate::error::FieldErrors;
use crate::models::TaskDraft;
use crate::mutation::{Editor, MutationStatus};
use crate::store::{save_task, use_board, TaskBoard, TaskBoardStoreFields};
use crate::validation::{fields, validate_task};

#[component]
pub fn TaskModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let board = use_board();
    let editor = Memo::new(move |_| board.editor().get());
    let draft = RwSignal::new(TaskDraft::default());
    let errors = RwSignal::new(FieldErrors::new());

    // Fresh form values each time the editor opens on something new
    Effect::new(move |_| {
        draft.set(editor.with(Editor::draft));
        errors.set(FieldErrors::new());
    });

    let editing = move || editor.with(|e| matches!(e, Editor::Editing(_)));
    let submitting = move || board.mutation().with(MutationStatus::is_submitting);
    let close = move || board.update(TaskBoard::close_editor);
    let field_error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.message(field)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let schema = editor.with_untracked(Editor::schema);
        match validate_task(&draft.get_untracked(), schema) {
            Err(field_errors) => errors.set(field_errors),
            Ok(valid) => {
                errors.set(FieldErrors::new());
                let api = ctx.tasks_api();
                spawn_local(async move {
                    save_task(api.as_ref(), board, valid).await;
                });
            }
        }
    };

    view! {
        <Show when=move || editor.with(Editor::is_open)>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <form class="task-form" on:submit=on_submit>
                        <h2>{move || if editing() { "Edit task" } else { "New task" }}</h2>
                        <label>
                            "Title"
                            <input
                                type="text"
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            />
                        </label>
                        <FieldErrorText message=field_error(fields::TITLE) />
                        <label>
                            "Description"
                            <textarea
                                rows="4"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <FieldErrorText message=field_error(fields::DESCRIPTION) />
                        <Show when=editing>
                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|d| d.is_done)
                                    on:change=move |ev| draft.update(|d| d.is_done = event_target_checked(&ev))
                                />
                                "Done"
                            </label>
                        </Show>
                        {move || {
                            board
                                .mutation()
                                .with(|m| m.error().map(str::to_string))
                                .map(|message| view! { <p class="form-error">{message}</p> })
                        }}
                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn" disabled=submitting>
                                {move || if editing() { "Save" } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
