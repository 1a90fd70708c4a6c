use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Types of authentication events
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthEventType {
    /// Successful login
    Login,
    /// User logout
    Logout,
    /// Failed login attempt
    FailedLogin,
    /// A view was requested without a session
    AccessDenied,
}

impl std::fmt::Display for AuthEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthEventType::Login => write!(f, "LOGIN"),
            AuthEventType::Logout => write!(f, "LOGOUT"),
            AuthEventType::FailedLogin => write!(f, "FAILED_LOGIN"),
            AuthEventType::AccessDenied => write!(f, "ACCESS_DENIED"),
        }
    }
}

/// Authentication event record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEvent {
    /// Type of authentication event
    pub event_type: AuthEventType,
    /// Email the event concerns (if available)
    pub user: Option<String>,
    /// Timestamp when the event occurred
    pub timestamp: DateTime<Utc>,
    /// Whether the event was successful
    pub success: bool,
    /// Additional details about the event
    pub details: Option<String>,
    /// The view being accessed (if applicable)
    pub resource: Option<String>,
}

impl AuthEvent {
    /// Create a new authentication event
    pub fn new(event_type: AuthEventType, user: Option<&str>, success: bool) -> Self {
        Self {
            event_type,
            user: user.map(String::from),
            timestamp: Utc::now(),
            success,
            details: None,
            resource: None,
        }
    }

    /// Set the details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the resource
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }
}

/// Log an authentication event
pub fn log_auth_event(event: &AuthEvent) {
    let user = event.user.as_deref().unwrap_or("anonymous");
    let details = event.details.as_deref().unwrap_or("");
    let resource = event.resource.as_deref().unwrap_or("");

    if event.success {
        info!(
            event_type = %event.event_type,
            user,
            resource,
            timestamp = %event.timestamp.to_rfc3339(),
            "AUTH-LOG {}",
            details
        );
    } else {
        warn!(
            event_type = %event.event_type,
            user,
            resource,
            timestamp = %event.timestamp.to_rfc3339(),
            "AUTH-LOG {}",
            details
        );
    }
}

/// Log a successful login
pub fn log_successful_login(user: &str) {
    log_auth_event(&AuthEvent::new(AuthEventType::Login, Some(user), true));
}

/// Log a failed login attempt
pub fn log_failed_login(user: &str, reason: &str) {
    log_auth_event(&AuthEvent::new(AuthEventType::FailedLogin, Some(user), false).with_details(reason));
}

/// Log a logout event
pub fn log_logout(user: &str) {
    log_auth_event(&AuthEvent::new(AuthEventType::Logout, Some(user), true));
}

/// Log an access denied event
pub fn log_access_denied(resource: &str) {
    let event = AuthEvent::new(AuthEventType::AccessDenied, None, false)
        .with_resource(resource)
        .with_details("login required");
    log_auth_event(&event);
}
