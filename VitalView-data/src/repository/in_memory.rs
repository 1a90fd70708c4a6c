use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{AlertCounts, Patient, VitalSign, VitalSignType};

/// Immutable in-memory storage for patients and their readings
///
/// Both collections live behind `Arc<[T]>`, so clones share the same data.
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Patients in seed order
    patients: Arc<[Patient]>,

    /// Readings in generation order
    vital_signs: Arc<[VitalSign]>,
}

impl InMemoryStorage {
    /// Create storage over a fixed dataset
    pub fn new(patients: Vec<Patient>, vital_signs: Vec<VitalSign>) -> Self {
        Self {
            patients: patients.into(),
            vital_signs: vital_signs.into(),
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn vital_signs(&self) -> &[VitalSign] {
        &self.vital_signs
    }

    /// Get a patient by id
    pub fn get_patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.id == id)
    }

    /// Get every reading of a patient, in storage order
    pub fn get_by_patient(&self, patient_id: &str) -> Vec<&VitalSign> {
        self.vital_signs.iter().filter(|sign| sign.patient_id == patient_id).collect()
    }

    /// Get the most recent reading per category for a patient
    pub fn get_latest_by_patient(&self, patient_id: &str) -> BTreeMap<VitalSignType, &VitalSign> {
        latest_per_type(self.vital_signs.iter().filter(|sign| sign.patient_id == patient_id))
    }

    /// Count warning and critical readings among every patient's latest readings
    pub fn count_alerts(&self) -> AlertCounts {
        let mut counts = AlertCounts::default();
        for patient in self.patients.iter() {
            for sign in self.get_latest_by_patient(&patient.id).values() {
                counts.record(sign.status);
            }
        }
        counts
    }
}

/// Pick the reading with the greatest timestamp for each category.
///
/// A later reading replaces the current pick only when its timestamp is
/// strictly greater, so on equal timestamps the first one seen is kept.
pub fn latest_per_type<'a, I>(signs: I) -> BTreeMap<VitalSignType, &'a VitalSign>
where
    I: IntoIterator<Item = &'a VitalSign>,
{
    let mut latest: BTreeMap<VitalSignType, &VitalSign> = BTreeMap::new();
    for sign in signs {
        latest
            .entry(sign.kind)
            .and_modify(|current| {
                if sign.timestamp > current.timestamp {
                    *current = sign;
                }
            })
            .or_insert(sign);
    }
    latest
}
