use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use vital_view_data::repository::{VitalSignsRepository, VitalSignsRepositoryTrait};
use vital_view_domain::auth::{CredentialGate, LoginRequest, Session};
use vital_view_domain::entities::HistoryFilter;
use vital_view_domain::services::{create_default_vital_signs_service, VitalSignsService};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::views::handlers::{self, PatientsQuery};

/// Screens the dashboard can render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Alerts,
    Patients(PatientsQuery),
    Patient { id: String },
    History(HistoryFilter),
}

impl View {
    /// Resource name used in login and access logs
    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Alerts => "alerts",
            View::Patients(_) => "patients",
            View::Patient { .. } => "patient",
            View::History(_) => "history",
        }
    }
}

/// A dataset, a login gate and the current session
#[derive(Debug)]
pub struct DashboardApp<R: VitalSignsRepositoryTrait = VitalSignsRepository> {
    service: VitalSignsService<R>,
    gate: CredentialGate,
    session: Session,
}

impl<R: VitalSignsRepositoryTrait> DashboardApp<R> {
    pub fn new(service: VitalSignsService<R>, gate: CredentialGate) -> Self {
        Self {
            service,
            gate,
            session: Session::new(),
        }
    }

    /// Build an app over an already constructed repository
    pub fn with_repository(repository: R, gate: CredentialGate) -> Self {
        Self::new(VitalSignsService::new(Arc::new(repository)), gate)
    }

    pub fn login(&mut self, request: &LoginRequest) -> Result<(), DashboardError> {
        self.session.login(&self.gate, request)?;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn service(&self) -> &VitalSignsService<R> {
        &self.service
    }

    /// Render a view as JSON. Every view requires a login.
    pub fn render(&self, view: &View) -> Result<Value, DashboardError> {
        let user = self.session.require(view.name())?;
        debug!(user, view = view.name(), "Rendering view");

        let body = match view {
            View::Dashboard => serde_json::to_value(handlers::get_dashboard(&self.service))?,
            View::Alerts => serde_json::to_value(handlers::get_alerts(&self.service))?,
            View::Patients(query) => serde_json::to_value(handlers::list_patients(
                &self.service,
                query.clone(),
                Utc::now().date_naive(),
            ))?,
            View::Patient { id } => serde_json::to_value(handlers::get_patient(&self.service, id)?)?,
            View::History(filter) => serde_json::to_value(handlers::list_history(&self.service, filter.clone()))?,
        };
        Ok(body)
    }
}

/// Generate the dataset described by the configuration and wrap it in an app
pub fn create_application(config: &DashboardConfig) -> Result<DashboardApp, DashboardError> {
    config.validate()?;

    let service = create_default_vital_signs_service(&config.generation(Utc::now()))?;
    info!(seed = ?config.seed, days = config.history_days, "Dashboard application ready");
    Ok(DashboardApp::new(service, config.credential_gate()))
}
