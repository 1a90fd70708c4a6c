use tracing::{info, instrument};

use vital_view_data::repository::VitalSignsRepositoryTrait;
use vital_view_domain::services::VitalSignsService;

use crate::entities::{AlertsResponse, DashboardResponse};

/// Landing view: counters, daily activity and patients needing attention
#[instrument(skip(service))]
pub fn get_dashboard<R: VitalSignsRepositoryTrait>(service: &VitalSignsService<R>) -> DashboardResponse {
    let summary = service.dashboard_summary();
    info!(
        patients = summary.total_patients,
        alerts = summary.total_alerts,
        attention = summary.attention.len(),
        "Dashboard built"
    );
    DashboardResponse::from(summary)
}

/// Alert counters across all patients
#[instrument(skip(service))]
pub fn get_alerts<R: VitalSignsRepositoryTrait>(service: &VitalSignsService<R>) -> AlertsResponse {
    let counts = service.get_alert_counts();
    info!(warning = counts.warning, critical = counts.critical, "Alert counts computed");
    AlertsResponse::from(counts)
}
