//! HTTP Client
//!
//! Thin wrapper over `reqwest` that sends the session cookie and turns
//! non-success responses into `ApiError`.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::ApiResult;
use crate::error::ApiError;

/// REST client bound to one API base URL
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url, path)
    }

    pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        // The session lives in an HttpOnly cookie owned by the API origin
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send and keep only successful responses.
    pub(super) async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(status.as_u16(), &body);
        log::debug!("{} -> {}", status, error);
        Err(error)
    }

    /// Send and decode a JSON body.
    pub(super) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_version_prefix() {
        let client = HttpClient::new("http://localhost:5050/");
        assert_eq!(client.url("/tasks/"), "http://localhost:5050/v1/tasks/");
        assert_eq!(client.url("/auth/users/me"), "http://localhost:5050/v1/auth/users/me");
    }
}
