// Domain entities and value objects
pub mod dashboard;
pub mod history;
pub mod patient_detail;

// Records owned by the data layer are used as-is
pub use vital_view_data::models::{
    AlertCounts, Gender, Patient, VitalSign, VitalSignStatus, VitalSignType, VitalSignValue,
};

// Re-export common types for easier imports
pub use dashboard::{AttentionItem, DailyActivity, DashboardSummary};
pub use history::{HistoryEntry, HistoryFilter};
pub use patient_detail::{BloodPressurePoint, ChartPoint, PatientDetail};
