//! Auth Commands
//!
//! Bindings for the `/auth` endpoints.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::{ApiResult, AuthApi, HttpClient};
use crate::models::User;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody<'a> {
    email: &'a str,
    password: &'a str,
    password_confirm: &'a str,
}

// ========================
// Commands
// ========================

#[async_trait(?Send)]
impl AuthApi for HttpClient {
    async fn probe_identity(&self) -> ApiResult<User> {
        self.send_json(self.request(Method::GET, "/auth/users/me")).await
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        let request = self.request(Method::POST, "/auth/login").json(&LoginBody { email, password });
        self.send(request).await.map(|_| ())
    }

    async fn register(&self, email: &str, password: &str, password_confirm: &str) -> ApiResult<()> {
        let body = RegisterBody { email, password, password_confirm };
        // The created user is returned, but registering never signs in
        self.send(self.request(Method::POST, "/auth/register").json(&body)).await.map(|_| ())
    }

    async fn logout(&self) -> ApiResult<()> {
        self.send(self.request(Method::GET, "/auth/logout")).await.map(|_| ())
    }

    async fn refresh(&self) -> ApiResult<()> {
        self.send(self.request(Method::POST, "/auth/refresh")).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_uses_camel_case() {
        let body = RegisterBody { email: "a@b.io", password: "pw", password_confirm: "pw" };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["passwordConfirm"], "pw");
        assert!(value.get("password_confirm").is_none());
    }
}
