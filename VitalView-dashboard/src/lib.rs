// VitalView-dashboard lib.rs
//
// Library side of the `vitalview` binary: configuration, response
// entities and the view handlers.

// Public modules
pub mod config;
pub mod entities;
pub mod error;
pub mod views;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use views::{create_application, DashboardApp, View};
