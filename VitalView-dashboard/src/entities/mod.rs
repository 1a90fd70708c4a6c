// Response entities printed by the dashboard views
pub mod common;
pub mod history;
pub mod patient;
pub mod summary;

// Re-export common types for easier imports
pub use common::{ErrorResponse, ListResponse};
pub use history::HistoryRow;
pub use patient::PatientSummary;
pub use summary::{AlertsResponse, DashboardResponse};
