//! Username/password sign-in form.

use crate::error::{NetworkError, ValidationError};
use crate::models::{LoginRequest, LoginResponse};

pub const TITLE: &str = "Chama";
pub const SUBTITLE: &str = "Sign in to your savings group";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// What a finished login attempt means for the app.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Signed in as this user.
    SignedIn { username: String },
    /// Stay on the form; the error is shown inline.
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Signing in..."
        } else {
            "Sign In"
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.submitting {
            return;
        }
        match self.focus {
            LoginField::Username => self.username.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        match self.focus {
            LoginField::Username => self.username.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(LoginRequest {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }

    /// Validate and mark as submitting. Validation failures are shown inline.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.submitting {
            return None;
        }
        match self.validate() {
            Ok(request) => {
                self.error = None;
                self.submitting = true;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    pub fn finish(&mut self, result: Result<LoginResponse, NetworkError>) -> LoginOutcome {
        self.submitting = false;
        match result {
            Ok(response) if response.success => {
                let username = response
                    .user
                    .map(|u| u.username)
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| self.username.trim().to_string());
                self.password.clear();
                self.error = None;
                LoginOutcome::SignedIn { username }
            }
            Ok(response) => {
                self.error = Some(
                    response
                        .message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
                );
                LoginOutcome::Rejected
            }
            Err(err) => {
                tracing::warn!("login failed [{}]: {}", err.error_code(), err);
                self.error = Some(match &err {
                    NetworkError::HttpStatus { status: 401, .. } => err
                        .server_message()
                        .unwrap_or(INVALID_CREDENTIALS)
                        .to_string(),
                    _ => err
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| err.user_message()),
                });
                LoginOutcome::Rejected
            }
        }
    }
}
