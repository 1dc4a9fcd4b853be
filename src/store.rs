//! Task Board Store
//!
//! State of the task page (query, last fetched page, errors, editor, delete
//! confirmation) in a `reactive_stores` store, plus the async flows that talk
//! to the API and feed results back in.
//!
//! Only the newest fetch may write its result: every fetch takes a sequence
//! number and a response carrying an older one is dropped.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_debounce::use_debounce;
use reactive_stores::Store;

use crate::commands::{ApiResult, TaskApi};
use crate::models::{Paginated, SortBy, SortOrder, Task, TaskDraft, TaskId};
use crate::mutation::{DeleteStage, Editor, MutationStatus, DELETE_FAILED, SAVE_FAILED};
use crate::pagination::PageWindow;
use crate::query::{ListTasksParams, TaskQuery};
use crate::session::SessionStore;

/// Task page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct TaskBoard {
    /// Committed query; the list is refetched whenever it changes
    pub query: TaskQuery,
    /// Search box contents, committed into `query.title` after the debounce
    pub search_text: String,
    /// Latest applied response
    pub result: Option<Paginated<Task>>,
    /// Banner messages, cleared when a fetch starts
    pub errors: Vec<String>,
    pub loading: bool,
    /// Sequence number of the newest fetch
    pub latest_request: u64,
    pub editor: Editor,
    pub delete: DeleteStage,
    pub mutation: MutationStatus,
}

/// Type alias for the store
pub type BoardStore = Store<TaskBoard>;

/// Get the board store from context
pub fn use_board() -> BoardStore {
    expect_context::<BoardStore>()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: ListTasksParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer fetch was issued meanwhile
    Stale,
    /// Applied, but the page was past the end and moved back
    PageClamped,
    /// The server no longer accepts the session cookie
    Unauthorized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(TaskDraft),
    Update(TaskId, TaskDraft),
}

impl TaskBoard {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: TaskQuery::new(page_size),
            search_text: String::new(),
            result: None,
            errors: Vec::new(),
            loading: false,
            latest_request: 0,
            editor: Editor::Closed,
            delete: DeleteStage::None,
            mutation: MutationStatus::Idle,
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.result.as_ref().map(|r| r.items.clone()).unwrap_or_default()
    }

    /// Recomputed from the latest response on every call
    pub fn page_window(&self) -> PageWindow {
        let total = self.result.as_ref().map_or(0, |r| r.total);
        PageWindow::new(self.query.page, total, self.query.size)
    }

    // ========================
    // Query
    // ========================

    pub fn commit_search(&mut self, text: &str) -> bool {
        self.query.set_title(text)
    }

    pub fn set_is_done(&mut self, is_done: Option<bool>) -> bool {
        self.query.set_is_done(is_done)
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) -> bool {
        self.query.set_sort_by(sort_by)
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) -> bool {
        self.query.set_sort_order(sort_order)
    }

    pub fn next_page(&mut self) -> bool {
        let next = self.page_window().next();
        self.query.set_page(next)
    }

    pub fn prev_page(&mut self) -> bool {
        let prev = self.page_window().prev();
        self.query.set_page(prev)
    }

    // ========================
    // Fetch
    // ========================

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_request += 1;
        self.errors.clear();
        self.loading = true;
        FetchTicket {
            seq: self.latest_request,
            params: self.query.to_params(),
        }
    }

    pub fn finish_fetch(&mut self, seq: u64, result: ApiResult<Paginated<Task>>) -> FetchOutcome {
        if seq != self.latest_request {
            log::debug!("dropping stale task page #{} (latest #{})", seq, self.latest_request);
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.result = Some(page);
                let window = self.page_window();
                if self.query.page > 0 && self.query.page > window.last() {
                    self.query.set_page(window.last());
                    return FetchOutcome::PageClamped;
                }
            }
            Err(error) => {
                log::warn!("loading tasks failed: {}", error);
                self.errors = error.list_messages();
                if error.status() == Some(401) {
                    return FetchOutcome::Unauthorized;
                }
            }
        }
        FetchOutcome::Applied
    }

    // ========================
    // Editor
    // ========================

    pub fn open_create(&mut self) {
        self.open_editor(Editor::Creating);
    }

    pub fn open_edit(&mut self, task: Task) {
        self.open_editor(Editor::Editing(task));
    }

    fn open_editor(&mut self, editor: Editor) {
        if self.mutation.is_submitting() {
            return;
        }
        self.editor = editor;
        self.mutation = MutationStatus::Idle;
    }

    /// Does not cancel a save in flight
    pub fn close_editor(&mut self) {
        self.editor = Editor::Closed;
        if self.mutation.error().is_some() {
            self.mutation = MutationStatus::Idle;
        }
    }

    pub fn begin_save(&mut self, draft: TaskDraft) -> Option<SaveRequest> {
        if self.mutation.is_submitting() {
            return None;
        }
        let request = match &self.editor {
            Editor::Closed => return None,
            Editor::Creating => SaveRequest::Create(draft),
            Editor::Editing(task) => SaveRequest::Update(task.id, draft),
        };
        self.mutation = MutationStatus::Submitting;
        Some(request)
    }

    /// Returns whether the list should be refetched.
    pub fn finish_save(&mut self, result: ApiResult<Task>) -> bool {
        match result {
            Ok(task) => {
                log::info!("saved task #{}", task.id);
                self.mutation = MutationStatus::Succeeded;
                self.editor = Editor::Closed;
                true
            }
            Err(error) => {
                log::warn!("saving task failed: {}", error);
                self.mutation = MutationStatus::Failed(SAVE_FAILED.to_string());
                // Editor already dismissed: report through the banner instead
                if !self.editor.is_open() {
                    self.errors.push(SAVE_FAILED.to_string());
                }
                false
            }
        }
    }

    // ========================
    // Delete
    // ========================

    pub fn request_delete(&mut self, task: Task) {
        if self.mutation.is_submitting() {
            return;
        }
        self.delete = DeleteStage::Staged(task);
    }

    pub fn cancel_delete(&mut self) {
        self.delete = DeleteStage::None;
    }

    pub fn begin_delete(&mut self) -> Option<TaskId> {
        if self.mutation.is_submitting() {
            return None;
        }
        let id = self.delete.target()?.id;
        self.mutation = MutationStatus::Submitting;
        Some(id)
    }

    /// Returns whether the list should be refetched.
    pub fn finish_delete(&mut self, result: ApiResult<()>) -> bool {
        self.delete = DeleteStage::None;
        match result {
            Ok(()) => {
                self.mutation = MutationStatus::Succeeded;
                true
            }
            Err(error) => {
                log::warn!("deleting task failed: {}", error);
                self.mutation = MutationStatus::Failed(DELETE_FAILED.to_string());
                self.errors.push(DELETE_FAILED.to_string());
                false
            }
        }
    }
}

// ========================
// Flows
// ========================

/// Fetch the page described by the current query.
pub async fn refresh(api: &dyn TaskApi, board: BoardStore) -> Option<FetchOutcome> {
    let ticket = board.try_update(TaskBoard::begin_fetch)?;
    let result = api.list_tasks(&ticket.params).await;
    let outcome = board.try_update(|b| b.finish_fetch(ticket.seq, result))?;
    log::debug!("task page #{} {:?}", ticket.seq, outcome);
    Some(outcome)
}

/// Fetch once now and once per committed query change.
///
/// A 401 renews the session once and retries the same query; the retry itself
/// never renews again.
pub fn watch_query(board: BoardStore, api: Arc<dyn TaskApi>, session: SessionStore) {
    // Track only the query; the fetch itself writes to other fields
    let query = Memo::new(move |_| board.query().get());
    Effect::new(move |_| {
        let _ = query.get();
        let api = Arc::clone(&api);
        spawn_local(async move {
            if refresh(api.as_ref(), board).await == Some(FetchOutcome::Unauthorized) {
                log::info!("task list rejected the session, refreshing it");
                if session.refresh().await.is_ok() {
                    refresh(api.as_ref(), board).await;
                }
            }
        });
    });
}

/// Commit the search box into the query once typing pauses for one `quiet_period`.
pub fn watch_search<S, F>(board: BoardStore, quiet_period: S)
where
    S: Fn() -> F + 'static,
    F: Future<Output = ()> + 'static,
{
    let search_text = Memo::new(move |_| board.search_text().get());
    use_debounce(search_text, quiet_period, move |text: String| {
        board.update(|b| {
            b.commit_search(&text);
        });
    });
}

/// Create or update from the open editor, then refetch the unchanged query.
pub async fn save_task(api: &dyn TaskApi, board: BoardStore, draft: TaskDraft) {
    let Some(request) = board.try_update(|b| b.begin_save(draft)).flatten() else {
        return;
    };
    let result = match &request {
        SaveRequest::Create(draft) => api.create_task(draft).await,
        SaveRequest::Update(id, draft) => api.update_task(*id, draft).await,
    };
    if board.try_update(|b| b.finish_save(result)).unwrap_or(false) {
        refresh(api, board).await;
    }
}

/// Delete the staged task, then refetch the unchanged query.
pub async fn confirm_delete(api: &dyn TaskApi, board: BoardStore) {
    let Some(id) = board.try_update(TaskBoard::begin_delete).flatten() else {
        return;
    };
    let result = api.delete_task(id).await;
    if board.try_update(|b| b.finish_delete(result)).unwrap_or(false) {
        refresh(api, board).await;
    }
}
