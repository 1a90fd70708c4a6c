use serde::Serialize;

use vital_view_domain::entities::{AlertCounts, DashboardSummary};

/// Banner text for the alert panel
pub fn alert_message(counts: &AlertCounts) -> String {
    match counts.total() {
        0 => "All vital signs normal".to_string(),
        1 => "1 active alert".to_string(),
        n => format!("{} active alerts", n),
    }
}

/// Dashboard landing view
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub message: String,

    #[serde(flatten)]
    pub summary: DashboardSummary,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            message: alert_message(&summary.alerts),
            summary,
        }
    }
}

/// Alert counters on their own
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AlertsResponse {
    pub warning: usize,
    pub critical: usize,
    pub total: usize,
    pub message: String,
}

impl From<AlertCounts> for AlertsResponse {
    fn from(counts: AlertCounts) -> Self {
        Self {
            warning: counts.warning,
            critical: counts.critical,
            total: counts.total(),
            message: alert_message(&counts),
        }
    }
}
