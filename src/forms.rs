//! Auth Form Models
//!
//! Input state of the login and register forms, independent of rendering.
//! Login is two-staged: the password field only appears once the email is valid.

use crate::error::{ApiError, FieldErrors};
use crate::validation::{self, fields, Credentials, Registration};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginStage {
    #[default]
    Email,
    Password,
}

/// What a submit press should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStep {
    /// Input rejected or moved to the password stage; nothing to send
    Stay,
    Submit(Credentials),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub stage: LoginStage,
    pub errors: FieldErrors,
}

impl LoginForm {
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.errors.remove(fields::EMAIL);
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
        self.errors.remove(fields::PASSWORD);
    }

    pub fn submit(&mut self) -> LoginStep {
        match self.stage {
            LoginStage::Email => {
                match validation::validate_email(&self.email) {
                    Ok(_) => {
                        self.errors = FieldErrors::new();
                        self.stage = LoginStage::Password;
                    }
                    Err(errors) => self.errors = errors,
                }
                LoginStep::Stay
            }
            LoginStage::Password => match validation::validate_login(&self.email, &self.password) {
                Ok(credentials) => {
                    self.errors = FieldErrors::new();
                    LoginStep::Submit(credentials)
                }
                Err(errors) => {
                    self.errors = errors;
                    LoginStep::Stay
                }
            },
        }
    }

    /// Credentials errors from the server belong to the password field.
    pub fn reject(&mut self, error: &ApiError) {
        self.errors.insert(fields::PASSWORD, error.form_message());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub errors: FieldErrors,
}

impl RegisterForm {
    pub fn submit(&mut self) -> Option<Registration> {
        match validation::validate_registration(&self.email, &self.password, &self.password_confirm) {
            Ok(registration) => {
                self.errors = FieldErrors::new();
                Some(registration)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Server-side rejections are shown under the confirmation field.
    pub fn reject(&mut self, error: &ApiError) {
        self.errors.insert(fields::PASSWORD_CONFIRM, error.form_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldError, GENERIC_ERROR};

    #[test]
    fn test_malformed_email_stays_on_email_stage() {
        let mut form = LoginForm::default();
        form.set_email("user.example.com".into());

        assert_eq!(form.submit(), LoginStep::Stay);
        assert_eq!(form.stage, LoginStage::Email);
        assert_eq!(form.errors.get(fields::EMAIL), Some("Invalid email address"));
    }

    #[test]
    fn test_valid_email_advances_then_submits() {
        let mut form = LoginForm::default();
        form.set_email("user@example.com".into());
        assert_eq!(form.submit(), LoginStep::Stay);
        assert_eq!(form.stage, LoginStage::Password);
        assert!(form.errors.is_empty());

        // Empty password is caught locally
        assert_eq!(form.submit(), LoginStep::Stay);
        assert!(form.errors.get(fields::PASSWORD).is_some());

        form.set_password("secret".into());
        assert!(form.errors.is_empty());
        assert_eq!(
            form.submit(),
            LoginStep::Submit(Credentials { email: "user@example.com".into(), password: "secret".into() })
        );
    }

    #[test]
    fn test_editing_email_clears_its_error() {
        let mut form = LoginForm::default();
        form.submit();
        assert!(form.errors.get(fields::EMAIL).is_some());
        form.set_email("u".into());
        assert!(form.errors.get(fields::EMAIL).is_none());
    }

    #[test]
    fn test_login_rejection_attaches_to_password() {
        let mut form = LoginForm::default();
        form.reject(&ApiError::Detail { status: 400, message: "Incorrect email or password".into() });
        assert_eq!(form.errors.get(fields::PASSWORD), Some("Incorrect email or password"));

        form.reject(&ApiError::Transport("offline".into()));
        assert_eq!(form.errors.get(fields::PASSWORD), Some(GENERIC_ERROR));
    }

    #[test]
    fn test_register_rejection_joins_messages_on_confirmation() {
        let mut form = RegisterForm::default();
        form.reject(&ApiError::Validation(vec![
            FieldError::new("email", "value is not a valid email address"),
            FieldError::new("", "Passwords do not match"),
        ]));
        assert_eq!(
            form.errors.get(fields::PASSWORD_CONFIRM),
            Some("value is not a valid email address, Passwords do not match")
        );
    }

    #[test]
    fn test_register_submit_validates() {
        let mut form = RegisterForm {
            email: "user@example.com".into(),
            password: "pw".into(),
            password_confirm: "other".into(),
            ..Default::default()
        };
        assert_eq!(form.submit(), None);
        assert!(form.errors.get(fields::PASSWORD_CONFIRM).is_some());

        form.password_confirm = "pw".into();
        assert!(form.submit().is_some());
        assert!(form.errors.is_empty());
    }
}
