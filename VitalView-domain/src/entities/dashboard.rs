use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vital_view_data::models::{AlertCounts, VitalSignStatus, VitalSignType};

/// Mean values of the tracked vitals across all patients for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyActivity {
    /// Calendar day (UTC)
    pub date: NaiveDate,

    /// Mean heart rate in bpm
    pub heart_rate: Option<f64>,

    /// Mean temperature in °C
    pub temperature: Option<f64>,

    /// Mean systolic pressure in mmHg
    pub systolic: Option<f64>,
}

/// A patient whose latest readings include at least one alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttentionItem {
    pub patient_id: String,
    pub patient_name: String,

    /// Display id, e.g. "P-10003"
    pub display_id: String,

    /// Worst status among the latest readings
    pub status: VitalSignStatus,

    /// Categories whose latest reading is warning or critical
    pub alerts: Vec<VitalSignType>,
}

/// Everything the dashboard landing view shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub alerts: AlertCounts,
    pub total_alerts: usize,

    /// One entry per day with readings, oldest first
    pub activity: Vec<DailyActivity>,

    /// Critical patients first, then warning
    pub attention: Vec<AttentionItem>,
}
