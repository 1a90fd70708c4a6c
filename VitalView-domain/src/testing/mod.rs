// Testing utilities and mock implementations for the domain layer
// This module is only available to tests and when the "mock" feature is enabled

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::entities::{AlertCounts, Patient, VitalSign, VitalSignType, VitalSignValue};
use vital_view_data::models::patient::seed_patients;
use vital_view_data::repository::{latest_per_type, GenerationConfig, VitalSignsRepository, VitalSignsRepositoryTrait};

/// Fixed "now" used by every fixture
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 7, 9, 30, 0).unwrap()
}

/// Build a reading taken `days_ago` days before [`anchor`]
pub fn reading(patient_id: &str, kind: VitalSignType, value: VitalSignValue, days_ago: u32) -> VitalSign {
    VitalSign::new(
        format!("{}-{}-{}", kind.id_prefix(), patient_id, days_ago),
        patient_id,
        kind,
        value,
        anchor() - Duration::days(i64::from(days_ago)),
    )
    .unwrap()
}

/// Hand-built readings with known statuses.
///
/// Latest readings: patient 1 all normal (an older critical heart rate is
/// superseded), patient 2 two warnings, patient 3 one critical and one
/// warning, patient 4 nothing, patient 5 one normal temperature.
/// Alert counts: 3 warning, 1 critical.
pub fn fixture_readings() -> Vec<VitalSign> {
    use VitalSignType::*;
    use VitalSignValue::Numeric;

    vec![
        reading("1", HeartRate, Numeric(72.0), 0),
        reading("1", HeartRate, Numeric(130.0), 1),
        reading("1", BloodPressure, VitalSignValue::BloodPressure { systolic: 120, diastolic: 80 }, 0),
        reading("1", Temperature, Numeric(36.6), 0),
        reading("1", OxygenSaturation, Numeric(98.0), 0),
        reading("1", RespiratoryRate, Numeric(16.0), 0),
        reading("2", HeartRate, Numeric(105.0), 0),
        reading("2", OxygenSaturation, Numeric(93.0), 0),
        reading("2", Temperature, Numeric(36.9), 1),
        reading("3", BloodPressure, VitalSignValue::BloodPressure { systolic: 190, diastolic: 100 }, 0),
        reading("3", Temperature, Numeric(38.0), 0),
        reading("3", RespiratoryRate, Numeric(14.0), 1),
        reading("5", Temperature, Numeric(36.5), 2),
    ]
}

/// Alert counts of [`fixture_readings`]
pub const FIXTURE_ALERTS: AlertCounts = AlertCounts { warning: 3, critical: 1 };

/// Repository over the seed patients and [`fixture_readings`]
pub fn fixture_repository() -> VitalSignsRepository {
    VitalSignsRepository::from_parts(seed_patients(), fixture_readings()).unwrap()
}

/// Repository with a generated, reproducible dataset
pub fn seeded_repository(seed: u64, days: u32) -> VitalSignsRepository {
    let config = GenerationConfig {
        days,
        anchor: anchor(),
        seed: Some(seed),
    };
    VitalSignsRepository::with_seed_patients(&config).unwrap()
}

/// Mock implementation of VitalSignsRepositoryTrait for testing
///
/// Unlike the real repository it accepts readings for patients it does not
/// know, which lets tests exercise the "Unknown" patient paths.
#[derive(Debug, Clone, Default)]
pub struct MockVitalSignsRepository {
    patients: Vec<Patient>,
    readings: Vec<VitalSign>,
}

impl MockVitalSignsRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add pre-defined patients to the mock
    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients.extend(patients);
        self
    }

    /// Add pre-defined readings to the mock
    pub fn with_readings(mut self, readings: Vec<VitalSign>) -> Self {
        self.readings.extend(readings);
        self
    }
}

impl VitalSignsRepositoryTrait for MockVitalSignsRepository {
    fn patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }

    fn find_patient(&self, id: &str) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }

    fn all(&self) -> Vec<VitalSign> {
        self.readings.clone()
    }

    fn find_by_patient(&self, patient_id: &str) -> Vec<VitalSign> {
        self.readings.iter().filter(|r| r.patient_id == patient_id).cloned().collect()
    }

    fn latest_by_patient(&self, patient_id: &str) -> BTreeMap<VitalSignType, VitalSign> {
        latest_per_type(self.readings.iter().filter(|r| r.patient_id == patient_id))
            .into_iter()
            .map(|(kind, sign)| (kind, sign.clone()))
            .collect()
    }

    fn alert_counts(&self) -> AlertCounts {
        let mut counts = AlertCounts::default();
        for patient in &self.patients {
            for sign in self.latest_by_patient(&patient.id).values() {
                counts.record(sign.status);
            }
        }
        counts
    }
}
