// Data storage models
pub mod patient;
pub mod thresholds;
pub mod vital_sign;

// Re-export commonly used types
pub use patient::{Gender, Patient};
pub use vital_sign::{AlertCounts, VitalSign, VitalSignStatus, VitalSignType, VitalSignValue};
