//! Placeholder login gate.
//!
//! A single configured email/password pair is compared against the login
//! request, and success flips an in-memory session flag. There is no
//! credential store, hashing or token issuance.

use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

// Include logging module
pub mod logging;

use logging::{log_access_denied, log_failed_login, log_logout, log_successful_login};

/// Email accepted when nothing else is configured
pub const DEFAULT_DOCTOR_EMAIL: &str = "doctor@example.com";

/// Password accepted when nothing else is configured
pub const DEFAULT_DOCTOR_PASSWORD: &str = "password";

/// Authentication errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The request is malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Email or password is wrong
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A view was requested before logging in
    #[error("Login required to access {0}")]
    NotAuthenticated(String),
}

/// Login form input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Run field validation and flatten the messages into one error
    pub fn check(&self) -> Result<(), AuthError> {
        self.validate().map_err(|validation_errors| {
            let mut fields: Vec<String> = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let messages: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    format!("{}: {}", field, messages.join(", "))
                })
                .collect();
            fields.sort();
            AuthError::Validation(fields.join("; "))
        })
    }
}

/// The one accepted credential pair
#[derive(Clone)]
pub struct CredentialGate {
    email: String,
    password: String,
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGate")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for CredentialGate {
    fn default() -> Self {
        Self::new(DEFAULT_DOCTOR_EMAIL, DEFAULT_DOCTOR_PASSWORD)
    }
}

impl CredentialGate {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check a login request against the configured pair
    pub fn authenticate(&self, request: &LoginRequest) -> Result<(), AuthError> {
        request.check()?;

        if request.email.eq_ignore_ascii_case(&self.email) && request.password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// In-memory "is logged in" flag
#[derive(Debug, Default)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate and remember the user on success
    pub fn login(&mut self, gate: &CredentialGate, request: &LoginRequest) -> Result<(), AuthError> {
        match gate.authenticate(request) {
            Ok(()) => {
                log_successful_login(&request.email);
                self.user = Some(request.email.clone());
                Ok(())
            }
            Err(err) => {
                log_failed_login(&request.email, &err.to_string());
                Err(err)
            }
        }
    }

    /// Forget the current user
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log_logout(&user);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Email of the logged in user
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Guard for views that need a login
    pub fn require(&self, resource: &str) -> Result<&str, AuthError> {
        match self.user.as_deref() {
            Some(user) => Ok(user),
            None => {
                log_access_denied(resource);
                Err(AuthError::NotAuthenticated(resource.to_string()))
            }
        }
    }
}
