//! Scripted API for tests
//!
//! Responses are queued per operation; an empty queue yields a benign default
//! (no session for `probe_identity`, success for everything else).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{ApiResult, AuthApi, TaskApi};
use crate::error::ApiError;
use crate::models::{Paginated, Task, TaskDraft, TaskId, User};
use crate::query::ListTasksParams;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ProbeIdentity,
    Login { email: String },
    Register { email: String },
    Logout,
    Refresh,
    ListTasks(ListTasksParams),
    CreateTask(TaskDraft),
    UpdateTask(TaskId, TaskDraft),
    DeleteTask(TaskId),
}

#[derive(Default)]
struct Script {
    identity: VecDeque<ApiResult<User>>,
    login: VecDeque<ApiResult<()>>,
    register: VecDeque<ApiResult<()>>,
    logout: VecDeque<ApiResult<()>>,
    refresh: VecDeque<ApiResult<()>>,
    list: VecDeque<ApiResult<Paginated<Task>>>,
    save: VecDeque<ApiResult<Task>>,
    delete: VecDeque<ApiResult<()>>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct FakeApi {
    script: Mutex<Script>,
}

pub fn task(id: TaskId, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        is_done: false,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap(),
    }
}

pub fn user(email: &str) -> User {
    User { id: Some(1), email: email.to_string() }
}

pub fn page_of(total: u64, ids: &[TaskId]) -> Paginated<Task> {
    Paginated {
        items: ids.iter().map(|id| task(*id, &format!("Task {}", id))).collect(),
        total,
        page: 1,
        size: 10,
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_script<R>(&self, f: impl FnOnce(&mut Script) -> R) -> R {
        f(&mut self.script.lock().unwrap())
    }

    pub fn push_identity(&self, result: ApiResult<User>) {
        self.with_script(|s| s.identity.push_back(result));
    }

    pub fn push_login(&self, result: ApiResult<()>) {
        self.with_script(|s| s.login.push_back(result));
    }

    pub fn push_register(&self, result: ApiResult<()>) {
        self.with_script(|s| s.register.push_back(result));
    }

    pub fn push_logout(&self, result: ApiResult<()>) {
        self.with_script(|s| s.logout.push_back(result));
    }

    pub fn push_refresh(&self, result: ApiResult<()>) {
        self.with_script(|s| s.refresh.push_back(result));
    }

    pub fn push_list(&self, result: ApiResult<Paginated<Task>>) {
        self.with_script(|s| s.list.push_back(result));
    }

    pub fn push_save(&self, result: ApiResult<Task>) {
        self.with_script(|s| s.save.push_back(result));
    }

    pub fn push_delete(&self, result: ApiResult<()>) {
        self.with_script(|s| s.delete.push_back(result));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.with_script(|s| s.calls.clone())
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.with_script(|s| s.calls.iter().filter(|c| matches(c)).count())
    }

    /// Parameters of every `list_tasks` call, in order
    pub fn list_params(&self) -> Vec<ListTasksParams> {
        self.with_script(|s| {
            s.calls
                .iter()
                .filter_map(|c| match c {
                    Call::ListTasks(params) => Some(params.clone()),
                    _ => None,
                })
                .collect()
        })
    }

    fn record(&self, call: Call) {
        self.with_script(|s| s.calls.push(call));
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn probe_identity(&self) -> ApiResult<User> {
        self.record(Call::ProbeIdentity);
        self.with_script(|s| s.identity.pop_front())
            .unwrap_or(Err(ApiError::Detail { status: 401, message: "Not authenticated".into() }))
    }

    async fn login(&self, email: &str, _password: &str) -> ApiResult<()> {
        self.record(Call::Login { email: email.to_string() });
        self.with_script(|s| s.login.pop_front()).unwrap_or(Ok(()))
    }

    async fn register(&self, email: &str, _password: &str, _password_confirm: &str) -> ApiResult<()> {
        self.record(Call::Register { email: email.to_string() });
        self.with_script(|s| s.register.pop_front()).unwrap_or(Ok(()))
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record(Call::Logout);
        self.with_script(|s| s.logout.pop_front()).unwrap_or(Ok(()))
    }

    async fn refresh(&self) -> ApiResult<()> {
        self.record(Call::Refresh);
        self.with_script(|s| s.refresh.pop_front()).unwrap_or(Ok(()))
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list_tasks(&self, params: &ListTasksParams) -> ApiResult<Paginated<Task>> {
        self.record(Call::ListTasks(params.clone()));
        self.with_script(|s| s.list.pop_front()).unwrap_or_else(|| Ok(Paginated::default()))
    }

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<Task> {
        self.record(Call::CreateTask(draft.clone()));
        self.with_script(|s| s.save.pop_front()).unwrap_or_else(|| Ok(task(100, &draft.title)))
    }

    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> ApiResult<Task> {
        self.record(Call::UpdateTask(id, draft.clone()));
        self.with_script(|s| s.save.pop_front()).unwrap_or_else(|| Ok(task(id, &draft.title)))
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.record(Call::DeleteTask(id));
        self.with_script(|s| s.delete.pop_front()).unwrap_or(Ok(()))
    }
}
