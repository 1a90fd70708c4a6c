// VitalView Domain
// This crate contains the query API and view derivations for the dashboard

// Services that implement business logic
pub mod services;

// Placeholder authentication gate
pub mod auth;

// Domain entities
pub mod entities;

// Re-export the repository module from vital_view_data for convenience
pub use vital_view_data::repository;

// Testing utilities - available to tests and with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
