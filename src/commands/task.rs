//! Task Commands
//!
//! Bindings for the `/tasks` endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::{ApiResult, HttpClient, TaskApi};
use crate::models::{Paginated, Task, TaskDraft, TaskId};
use crate::query::ListTasksParams;

#[async_trait(?Send)]
impl TaskApi for HttpClient {
    async fn list_tasks(&self, params: &ListTasksParams) -> ApiResult<Paginated<Task>> {
        self.send_json(self.request(Method::GET, "/tasks/").query(params)).await
    }

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<Task> {
        self.send_json(self.request(Method::POST, "/tasks/").json(draft)).await
    }

    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> ApiResult<Task> {
        self.send_json(self.request(Method::PUT, &format!("/tasks/{}", id)).json(draft)).await
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &format!("/tasks/{}", id))).await.map(|_| ())
    }
}
