//! API Errors
//!
//! Failures of REST calls, classified by how the UI shows them.

use serde::Deserialize;
use thiserror::Error;

/// Shown whenever a failure carries nothing the user can act on
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again later.";

/// A message attached to one input field
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Field errors of one form, at most one message per field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`, replacing an earlier one.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.message = message,
            None => self.0.push(FieldError::new(field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    /// Owned copy of the message, handy inside view closures
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(str::to_string)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.retain(|e| e.field != field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Failure of a REST call
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Structured field validation errors (HTTP 422)
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),
    /// Single domain message such as invalid credentials
    #[error("{message} (status {status})")]
    Detail { status: u16, message: String },
    /// HTTP error without a usable body
    #[error("request failed with status {0}")]
    Status(u16),
    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// FastAPI error body: `detail` is either a string or a list of field errors
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Detail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<WireFieldError>),
}

#[derive(Deserialize)]
struct WireFieldError {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.detail);
        match detail {
            Some(Detail::Message(message)) => ApiError::Detail { status, message },
            Some(Detail::Fields(fields)) if !fields.is_empty() => {
                ApiError::Validation(fields.into_iter().map(WireFieldError::into_field_error).collect())
            }
            _ => ApiError::Status(status),
        }
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Detail { status, .. } => Some(*status),
            ApiError::Status(status) => Some(*status),
            ApiError::Validation(_) => Some(422),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// Single line for a form field: messages joined, or the generic text.
    pub fn form_message(&self) -> String {
        match self {
            ApiError::Validation(fields) => join_messages(fields),
            ApiError::Detail { message, .. } => message.clone(),
            ApiError::Status(_) | ApiError::Transport(_) | ApiError::Decode(_) => GENERIC_ERROR.to_string(),
        }
    }

    /// Entries for the task list error banner.
    pub fn list_messages(&self) -> Vec<String> {
        match self {
            ApiError::Validation(fields) => fields.iter().map(|e| e.message.clone()).collect(),
            ApiError::Detail { status, .. } | ApiError::Status(status) => {
                vec![format!("Error {}: failed to load tasks", status)]
            }
            ApiError::Transport(_) | ApiError::Decode(_) => vec![GENERIC_ERROR.to_string()],
        }
    }
}

impl WireFieldError {
    fn into_field_error(self) -> FieldError {
        let field = self
            .loc
            .last()
            .map(|segment| match segment {
                serde_json::Value::String(name) => name.clone(),
                other => other.to_string(),
            })
            .unwrap_or_default();
        FieldError::new(field, self.msg)
    }
}

fn join_messages(fields: &[FieldError]) -> String {
    fields.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(", ")
}
