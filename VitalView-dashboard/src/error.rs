use thiserror::Error;

use crate::config::ConfigError;
use crate::entities::common::ErrorResponse;
use vital_view_data::repository::RepositoryError;
use vital_view_domain::auth::AuthError;
use vital_view_domain::services::VitalSignsServiceError;

/// Errors surfaced by the dashboard views
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Service(#[from] VitalSignsServiceError),

    #[error("Dataset error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashboardError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "invalid_configuration",
            DashboardError::Auth(AuthError::Validation(_)) => "invalid_login_request",
            DashboardError::Auth(AuthError::InvalidCredentials) => "invalid_credentials",
            DashboardError::Auth(AuthError::NotAuthenticated(_)) => "login_required",
            DashboardError::Service(VitalSignsServiceError::PatientNotFound(_)) => "patient_not_found",
            DashboardError::Service(VitalSignsServiceError::Repository(_)) | DashboardError::Repository(_) => {
                "dataset_error"
            }
            DashboardError::Serialization(_) => "serialization_error",
        }
    }

    /// Error body printed in place of a view
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        }
    }
}
