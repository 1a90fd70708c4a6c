use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use vital_view_data::repository::VitalSignsRepositoryTrait;
use vital_view_domain::entities::PatientDetail;
use vital_view_domain::services::{VitalSignsService, VitalSignsServiceError};

use crate::entities::{ListResponse, PatientSummary};
use crate::error::DashboardError;

/// Query parameters for the patient list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientsQuery {
    /// Matched against first name, last name and display id
    pub search: Option<String>,
}

/// Patient list, optionally narrowed by a search term
#[instrument(skip(service))]
pub fn list_patients<R: VitalSignsRepositoryTrait>(
    service: &VitalSignsService<R>,
    query: PatientsQuery,
    today: NaiveDate,
) -> ListResponse<PatientSummary, PatientsQuery> {
    let patients = service.search_patients(query.search.as_deref().unwrap_or_default());
    info!(count = patients.len(), "Listing patients");

    let rows = patients
        .iter()
        .map(|patient| PatientSummary::from_patient(patient, today))
        .collect();
    ListResponse::new(rows, query)
}

/// Detail view of one patient
#[instrument(skip(service))]
pub fn get_patient<R: VitalSignsRepositoryTrait>(
    service: &VitalSignsService<R>,
    id: &str,
) -> Result<PatientDetail, DashboardError> {
    match service.patient_detail(id) {
        Ok(detail) => {
            info!(readings = detail.latest.len(), "Patient detail built");
            Ok(detail)
        }
        Err(err @ VitalSignsServiceError::PatientNotFound(_)) => {
            warn!("Patient not found: {}", id);
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
