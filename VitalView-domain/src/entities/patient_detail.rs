use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vital_view_data::models::{Patient, VitalSign, VitalSignType};

/// One point of a scalar vital sign chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,

    /// Axis label, "dd/mm"
    pub date: String,

    pub value: f64,
}

/// One point of the blood pressure chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BloodPressurePoint {
    pub timestamp: DateTime<Utc>,
    pub date: String,
    pub systolic: u16,
    pub diastolic: u16,
}

/// Patient detail view: identity, latest readings and chart series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientDetail {
    pub patient: Patient,

    /// Age in whole years today
    pub age: u32,

    /// Latest reading per category
    pub latest: BTreeMap<VitalSignType, VitalSign>,

    pub heart_rate: Vec<ChartPoint>,
    pub temperature: Vec<ChartPoint>,
    pub oxygen_saturation: Vec<ChartPoint>,
    pub respiratory_rate: Vec<ChartPoint>,
    pub blood_pressure: Vec<BloodPressurePoint>,
}
