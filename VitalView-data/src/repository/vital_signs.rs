use std::collections::BTreeMap;

use tracing::{debug, info};

use super::errors::RepositoryError;
use super::generator::{generate, GenerationConfig};
use super::in_memory::InMemoryStorage;
use crate::models::patient::seed_patients;
use crate::models::{AlertCounts, Patient, VitalSign, VitalSignType};

/// Repository trait for patients and their vital signs
///
/// Every query is read-only. Unknown ids produce empty or absent results,
/// never errors.
pub trait VitalSignsRepositoryTrait {
    /// Get all patients
    fn patients(&self) -> Vec<Patient>;

    /// Get a patient by id
    fn find_patient(&self, id: &str) -> Option<Patient>;

    /// Get every reading in the dataset
    fn all(&self) -> Vec<VitalSign>;

    /// Get all readings for a patient
    fn find_by_patient(&self, patient_id: &str) -> Vec<VitalSign>;

    /// Get the most recent reading of each category for a patient
    fn latest_by_patient(&self, patient_id: &str) -> BTreeMap<VitalSignType, VitalSign>;

    /// Count warning and critical readings among all patients' latest readings
    fn alert_counts(&self) -> AlertCounts;
}

/// Repository over an immutable, in-memory dataset.
///
/// Construct it once at startup and share it; clones are cheap and see the
/// same data.
#[derive(Debug, Clone)]
pub struct VitalSignsRepository {
    storage: InMemoryStorage,
}

impl VitalSignsRepository {
    /// Create a repository over an existing dataset.
    ///
    /// Fails if a reading references a patient that is not in `patients`.
    pub fn from_parts(patients: Vec<Patient>, vital_signs: Vec<VitalSign>) -> Result<Self, RepositoryError> {
        if let Some(orphan) = vital_signs
            .iter()
            .find(|sign| !patients.iter().any(|patient| patient.id == sign.patient_id))
        {
            return Err(RepositoryError::Validation(format!(
                "reading {} references unknown patient {}",
                orphan.id, orphan.patient_id
            )));
        }

        Ok(Self {
            storage: InMemoryStorage::new(patients, vital_signs),
        })
    }

    /// Generate a synthetic dataset for the given patients
    pub fn generate(patients: Vec<Patient>, config: &GenerationConfig) -> Result<Self, RepositoryError> {
        let mut rng = config.rng();
        let vital_signs = generate(&patients, config, &mut rng)?;
        info!(
            patients = patients.len(),
            readings = vital_signs.len(),
            seeded = config.seed.is_some(),
            "Vital signs dataset ready"
        );
        Self::from_parts(patients, vital_signs)
    }

    /// Generate a synthetic dataset for the built-in patient list
    pub fn with_seed_patients(config: &GenerationConfig) -> Result<Self, RepositoryError> {
        Self::generate(seed_patients(), config)
    }
}

impl VitalSignsRepositoryTrait for VitalSignsRepository {
    fn patients(&self) -> Vec<Patient> {
        self.storage.patients().to_vec()
    }

    fn find_patient(&self, id: &str) -> Option<Patient> {
        self.storage.get_patient(id).cloned()
    }

    fn all(&self) -> Vec<VitalSign> {
        self.storage.vital_signs().to_vec()
    }

    fn find_by_patient(&self, patient_id: &str) -> Vec<VitalSign> {
        let signs: Vec<VitalSign> = self.storage.get_by_patient(patient_id).into_iter().cloned().collect();
        debug!(patient_id, count = signs.len(), "Found readings for patient");
        signs
    }

    fn latest_by_patient(&self, patient_id: &str) -> BTreeMap<VitalSignType, VitalSign> {
        self.storage
            .get_latest_by_patient(patient_id)
            .into_iter()
            .map(|(kind, sign)| (kind, sign.clone()))
            .collect()
    }

    fn alert_counts(&self) -> AlertCounts {
        self.storage.count_alerts()
    }
}
