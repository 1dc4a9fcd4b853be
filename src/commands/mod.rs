//! REST Command Wrappers
//!
//! Frontend bindings to the task API, organized by domain. Flows depend on the
//! `AuthApi` / `TaskApi` traits so they can run against a scripted fake in tests.

mod auth;
mod client;
mod task;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Paginated, Task, TaskDraft, TaskId, User};
use crate::query::ListTasksParams;

pub use client::HttpClient;

pub type ApiResult<T> = Result<T, ApiError>;

/// Session endpoints
#[async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// Who am I; fails with 401 when there is no session
    async fn probe_identity(&self) -> ApiResult<User>;

    async fn login(&self, email: &str, password: &str) -> ApiResult<()>;

    async fn register(&self, email: &str, password: &str, password_confirm: &str) -> ApiResult<()>;

    async fn logout(&self) -> ApiResult<()>;

    /// Rotate the session cookie
    async fn refresh(&self) -> ApiResult<()>;
}

/// Task CRUD endpoints
#[async_trait(?Send)]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self, params: &ListTasksParams) -> ApiResult<Paginated<Task>>;

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<Task>;

    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> ApiResult<Task>;

    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;
}
