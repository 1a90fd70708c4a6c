use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::entities::{
    AlertCounts, BloodPressurePoint, ChartPoint, DashboardSummary, HistoryEntry, HistoryFilter, Patient,
    PatientDetail, VitalSign, VitalSignType,
};
use crate::services::insights::{attention_item, daily_activity};
use vital_view_data::repository::{GenerationConfig, RepositoryError, VitalSignsRepository, VitalSignsRepositoryTrait};

/// Vital signs service errors
#[derive(Debug, Error)]
pub enum VitalSignsServiceError {
    /// Patient not found
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Name shown for readings whose patient is not on file
pub const UNKNOWN_PATIENT: &str = "Unknown";

/// Query API over a shared vital signs repository
#[derive(Debug)]
pub struct VitalSignsService<R: VitalSignsRepositoryTrait> {
    repository: Arc<R>,
}

impl<R: VitalSignsRepositoryTrait> Clone for VitalSignsService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: VitalSignsRepositoryTrait> VitalSignsService<R> {
    /// Create a new vital signs service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a patient by id
    pub fn get_patient_by_id(&self, id: &str) -> Option<Patient> {
        self.repository.find_patient(id)
    }

    /// Get every reading of a patient
    pub fn get_patient_vital_signs(&self, patient_id: &str) -> Vec<VitalSign> {
        self.repository.find_by_patient(patient_id)
    }

    /// Get the latest reading per category for a patient
    pub fn get_latest_vital_signs(&self, patient_id: &str) -> BTreeMap<VitalSignType, VitalSign> {
        self.repository.latest_by_patient(patient_id)
    }

    /// Count warning and critical latest readings across all patients
    pub fn get_alert_counts(&self) -> AlertCounts {
        self.repository.alert_counts()
    }

    /// Case-insensitive search on first name, last name and display id
    pub fn search_patients(&self, term: &str) -> Vec<Patient> {
        let term = term.trim().to_lowercase();
        self.repository
            .patients()
            .into_iter()
            .filter(|patient| {
                term.is_empty()
                    || patient.first_name.to_lowercase().contains(&term)
                    || patient.last_name.to_lowercase().contains(&term)
                    || patient.patient_id.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// History table rows matching the filter, newest first
    pub fn filter_history(&self, filter: &HistoryFilter) -> Vec<HistoryEntry> {
        let names: BTreeMap<String, String> = self
            .repository
            .patients()
            .into_iter()
            .map(|patient| (patient.id.clone(), patient.full_name()))
            .collect();

        let mut signs: Vec<VitalSign> = match filter.patient_id.as_deref() {
            Some(patient_id) => self.repository.find_by_patient(patient_id),
            None => self.repository.all(),
        };
        signs.retain(|sign| filter.matches(sign));
        // Stable sort keeps generation order within a timestamp
        signs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        debug!(?filter, rows = signs.len(), "Filtered history");

        signs
            .into_iter()
            .map(|sign| HistoryEntry {
                patient_name: names
                    .get(&sign.patient_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_PATIENT.to_string()),
                sign,
            })
            .collect()
    }

    /// Scalar chart points for one category, oldest first.
    ///
    /// Blood pressure has no scalar value and yields no points; use
    /// [`Self::blood_pressure_series`].
    pub fn chart_series(&self, patient_id: &str, kind: VitalSignType) -> Vec<ChartPoint> {
        sorted_by_time(self.repository.find_by_patient(patient_id), kind)
            .into_iter()
            .filter_map(|sign| {
                sign.value.as_number().map(|value| ChartPoint {
                    timestamp: sign.timestamp,
                    date: sign.timestamp.format("%d/%m").to_string(),
                    value,
                })
            })
            .collect()
    }

    /// Systolic/diastolic chart points, oldest first
    pub fn blood_pressure_series(&self, patient_id: &str) -> Vec<BloodPressurePoint> {
        sorted_by_time(self.repository.find_by_patient(patient_id), VitalSignType::BloodPressure)
            .into_iter()
            .filter_map(|sign| {
                sign.value
                    .as_blood_pressure()
                    .map(|(systolic, diastolic)| BloodPressurePoint {
                        timestamp: sign.timestamp,
                        date: sign.timestamp.format("%d/%m").to_string(),
                        systolic,
                        diastolic,
                    })
            })
            .collect()
    }

    /// Patient detail view
    pub fn patient_detail(&self, patient_id: &str) -> Result<PatientDetail, VitalSignsServiceError> {
        let patient = self
            .get_patient_by_id(patient_id)
            .ok_or_else(|| VitalSignsServiceError::PatientNotFound(patient_id.to_string()))?;

        Ok(PatientDetail {
            age: patient.age_on(Utc::now().date_naive()),
            latest: self.get_latest_vital_signs(patient_id),
            heart_rate: self.chart_series(patient_id, VitalSignType::HeartRate),
            temperature: self.chart_series(patient_id, VitalSignType::Temperature),
            oxygen_saturation: self.chart_series(patient_id, VitalSignType::OxygenSaturation),
            respiratory_rate: self.chart_series(patient_id, VitalSignType::RespiratoryRate),
            blood_pressure: self.blood_pressure_series(patient_id),
            patient,
        })
    }

    /// Dashboard landing view
    pub fn dashboard_summary(&self) -> DashboardSummary {
        let patients = self.repository.patients();
        let alerts = self.get_alert_counts();

        let mut attention: Vec<_> = patients
            .iter()
            .filter_map(|patient| attention_item(patient, &self.get_latest_vital_signs(&patient.id)))
            .collect();
        attention.sort_by_key(|item| std::cmp::Reverse(item.status));

        DashboardSummary {
            total_patients: patients.len(),
            total_alerts: alerts.total(),
            alerts,
            activity: daily_activity(&self.repository.all()),
            attention,
        }
    }
}

fn sorted_by_time(signs: Vec<VitalSign>, kind: VitalSignType) -> Vec<VitalSign> {
    let mut signs: Vec<VitalSign> = signs.into_iter().filter(|sign| sign.kind == kind).collect();
    signs.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    signs
}

/// Factory function to create the default service over a generated dataset
pub fn create_default_vital_signs_service(
    config: &GenerationConfig,
) -> Result<VitalSignsService<VitalSignsRepository>, VitalSignsServiceError> {
    let repository = VitalSignsRepository::with_seed_patients(config)?;
    info!(days = config.days, "Vital signs service created");
    Ok(VitalSignsService::new(Arc::new(repository)))
}

/// Factory function to create a service backed by the mock repository
#[cfg(feature = "mock")]
pub fn create_mock_vital_signs_service(
    repository: crate::testing::MockVitalSignsRepository,
) -> VitalSignsService<crate::testing::MockVitalSignsRepository> {
    VitalSignsService::new(Arc::new(repository))
}
