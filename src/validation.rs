//! Form Validation
//!
//! Pure checks mirroring the API's request schemas. Each validator returns the
//! cleaned input or the errors keyed by form field.

use crate::error::FieldErrors;
use crate::models::TaskDraft;

/// Form field names, matching the API's camelCase payload keys
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PASSWORD_CONFIRM: &str = "passwordConfirm";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
}

pub const TITLE_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 2048;

const REQUIRED: &str = "Required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Create needs non-empty text; update only enforces length limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSchema {
    Create,
    Update,
}

/// Email stage of the login form.
pub fn validate_email(email: &str) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = email.trim();
    if let Some(message) = email_problem(email) {
        errors.insert(fields::EMAIL, message);
    }
    errors.into_result(email.to_string())
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let mut errors = match validate_email(email) {
        Ok(_) => FieldErrors::new(),
        Err(errors) => errors,
    };
    if password.is_empty() {
        errors.insert(fields::PASSWORD, REQUIRED);
    }
    errors.into_result(Credentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

pub fn validate_registration(
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<Registration, FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Some(message) = email_problem(email.trim()) {
        errors.insert(fields::EMAIL, message);
    }
    if password.is_empty() {
        errors.insert(fields::PASSWORD, REQUIRED);
    }
    if password_confirm.is_empty() {
        errors.insert(fields::PASSWORD_CONFIRM, REQUIRED);
    } else if password_confirm != password {
        errors.insert(fields::PASSWORD_CONFIRM, "Passwords do not match");
    }
    errors.into_result(Registration {
        email: email.trim().to_string(),
        password: password.to_string(),
        password_confirm: password_confirm.to_string(),
    })
}

pub fn validate_task(draft: &TaskDraft, schema: TaskSchema) -> Result<TaskDraft, FieldErrors> {
    let mut errors = FieldErrors::new();
    let title = draft.title.trim();
    let description = draft.description.trim();

    if let Some(message) = text_problem(title, TITLE_MAX_LEN, schema) {
        errors.insert(fields::TITLE, message);
    }
    if let Some(message) = text_problem(description, DESCRIPTION_MAX_LEN, schema) {
        errors.insert(fields::DESCRIPTION, message);
    }

    errors.into_result(TaskDraft {
        title: title.to_string(),
        description: description.to_string(),
        is_done: draft.is_done,
    })
}

fn email_problem(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some(REQUIRED);
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|label| !label.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    (!valid).then_some("Invalid email address")
}

fn text_problem(text: &str, max_len: usize, schema: TaskSchema) -> Option<String> {
    if schema == TaskSchema::Create && text.is_empty() {
        return Some(REQUIRED.to_string());
    }
    if text.chars().count() > max_len {
        return Some(format!("Must be at most {} characters", max_len));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("  user@example.com  ", true)]
    #[case("first.last@mail.co.uk", true)]
    #[case("", false)]
    #[case("user", false)]
    #[case("user@", false)]
    #[case("@example.com", false)]
    #[case("user@example", false)]
    #[case("user@@example.com", false)]
    #[case("user@example..com", false)]
    #[case("us er@example.com", false)]
    fn test_email(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(validate_email(email).is_ok(), valid, "{:?}", email);
    }

    #[test]
    fn test_email_error_lands_on_email_field() {
        let errors = validate_email("not-an-email").unwrap_err();
        assert_eq!(errors.get(fields::EMAIL), Some("Invalid email address"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_login_requires_password() {
        let errors = validate_login("user@example.com", "").unwrap_err();
        assert_eq!(errors.get(fields::PASSWORD), Some(REQUIRED));
        assert_eq!(errors.get(fields::EMAIL), None);

        let creds = validate_login(" user@example.com ", "secret").unwrap();
        assert_eq!(creds.email, "user@example.com");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_registration_mismatch() {
        let errors = validate_registration("user@example.com", "one", "two").unwrap_err();
        assert_eq!(errors.get(fields::PASSWORD_CONFIRM), Some("Passwords do not match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_registration_collects_every_field() {
        let errors = validate_registration("bad", "", "").unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(validate_registration("user@example.com", "pw", "pw").is_ok());
    }

    #[test]
    fn test_task_create_requires_text() {
        let draft = TaskDraft { title: "  ".into(), description: String::new(), is_done: false };
        let errors = validate_task(&draft, TaskSchema::Create).unwrap_err();
        assert_eq!(errors.get(fields::TITLE), Some(REQUIRED));
        assert_eq!(errors.get(fields::DESCRIPTION), Some(REQUIRED));
    }

    #[test]
    fn test_task_update_allows_empty_text() {
        let draft = TaskDraft { title: String::new(), description: String::new(), is_done: true };
        assert_eq!(validate_task(&draft, TaskSchema::Update), Ok(draft));
    }

    #[test]
    fn test_task_length_limits() {
        let draft = TaskDraft {
            title: "t".repeat(TITLE_MAX_LEN + 1),
            description: "d".repeat(DESCRIPTION_MAX_LEN),
            is_done: false,
        };
        let errors = validate_task(&draft, TaskSchema::Update).unwrap_err();
        assert_eq!(errors.get(fields::TITLE), Some("Must be at most 255 characters"));
        assert_eq!(errors.get(fields::DESCRIPTION), None);
    }

    #[test]
    fn test_task_is_trimmed() {
        let draft = TaskDraft { title: " Buy milk ".into(), description: " 2l ".into(), is_done: false };
        let cleaned = validate_task(&draft, TaskSchema::Create).unwrap();
        assert_eq!(cleaned.title, "Buy milk");
        assert_eq!(cleaned.description, "2l");
    }
}
