pub mod dashboard;
pub mod history;
pub mod patients;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use dashboard::{get_alerts, get_dashboard};
pub use history::list_history;
pub use patients::{get_patient, list_patients, PatientsQuery};
