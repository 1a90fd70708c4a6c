//! Fixed clinical thresholds used to derive a reading's status.
//!
//! Every classifier checks the critical band first, then the warning band.
//! The warning band always contains the critical band, so the highest
//! severity wins.

use super::vital_sign::{VitalSignStatus, VitalSignType, VitalSignValue};
use crate::repository::errors::RepositoryError;

fn severity(critical: bool, warning: bool) -> VitalSignStatus {
    if critical {
        VitalSignStatus::Critical
    } else if warning {
        VitalSignStatus::Warning
    } else {
        VitalSignStatus::Normal
    }
}

/// Normal 60-100 bpm, critical below 50 or above 120
pub fn classify_heart_rate(bpm: f64) -> VitalSignStatus {
    severity(bpm < 50.0 || bpm > 120.0, bpm < 60.0 || bpm > 100.0)
}

/// Normal while systolic <= 140 and diastolic <= 90, critical above 180/120
pub fn classify_blood_pressure(systolic: u16, diastolic: u16) -> VitalSignStatus {
    severity(systolic > 180 || diastolic > 120, systolic > 140 || diastolic > 90)
}

/// Normal 36.1-37.2 °C inclusive, critical at or below 35.0 or above 39.0
pub fn classify_temperature(celsius: f64) -> VitalSignStatus {
    severity(celsius <= 35.0 || celsius > 39.0, celsius < 36.1 || celsius > 37.2)
}

/// Normal from 95 %, critical below 90 %
pub fn classify_oxygen_saturation(percent: f64) -> VitalSignStatus {
    severity(percent < 90.0, percent < 95.0)
}

/// Normal 12-20 breaths/min, critical below 8 or above 25
pub fn classify_respiratory_rate(rate: f64) -> VitalSignStatus {
    severity(rate < 8.0 || rate > 25.0, rate < 12.0 || rate > 20.0)
}

/// Classify a value of the given category
pub fn classify(kind: VitalSignType, value: &VitalSignValue) -> Result<VitalSignStatus, RepositoryError> {
    // NaN fails every comparison and would otherwise read as normal
    if let VitalSignValue::Numeric(v) = value {
        if !v.is_finite() {
            return Err(RepositoryError::Validation(format!(
                "{} measurement must be a finite number, got {}",
                kind, v
            )));
        }
    }

    match (kind, value) {
        (VitalSignType::BloodPressure, VitalSignValue::BloodPressure { systolic, diastolic }) => {
            Ok(classify_blood_pressure(*systolic, *diastolic))
        }
        (VitalSignType::HeartRate, VitalSignValue::Numeric(v)) => Ok(classify_heart_rate(*v)),
        (VitalSignType::Temperature, VitalSignValue::Numeric(v)) => Ok(classify_temperature(*v)),
        (VitalSignType::OxygenSaturation, VitalSignValue::Numeric(v)) => Ok(classify_oxygen_saturation(*v)),
        (VitalSignType::RespiratoryRate, VitalSignValue::Numeric(v)) => Ok(classify_respiratory_rate(*v)),
        (kind, value) => Err(RepositoryError::Validation(format!(
            "value '{}' is not a valid {} measurement",
            value, kind
        ))),
    }
}
