pub mod insights;
pub mod vital_signs;

// Domain services
// This module contains the query API and the view derivations built on it.

// Re-export the service and factory functions
pub use vital_signs::{create_default_vital_signs_service, VitalSignsService, VitalSignsServiceError};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use vital_signs::create_mock_vital_signs_service;

// Include service tests
#[cfg(test)]
mod vital_signs_tests;
