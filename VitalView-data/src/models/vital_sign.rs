use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::thresholds;
use crate::repository::errors::RepositoryError;

/// Category of a vital sign measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum VitalSignType {
    /// Heart rate in beats per minute
    HeartRate,

    /// Systolic/diastolic blood pressure in mmHg
    BloodPressure,

    /// Body temperature in degrees Celsius
    Temperature,

    /// Peripheral oxygen saturation in percent
    OxygenSaturation,

    /// Respiratory rate in breaths per minute
    RespiratoryRate,
}

impl VitalSignType {
    /// Every category, in display order
    pub const ALL: [VitalSignType; 5] = [
        VitalSignType::HeartRate,
        VitalSignType::BloodPressure,
        VitalSignType::Temperature,
        VitalSignType::OxygenSaturation,
        VitalSignType::RespiratoryRate,
    ];

    /// Wire name, e.g. "heart_rate"
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalSignType::HeartRate => "heart_rate",
            VitalSignType::BloodPressure => "blood_pressure",
            VitalSignType::Temperature => "temperature",
            VitalSignType::OxygenSaturation => "oxygen_saturation",
            VitalSignType::RespiratoryRate => "respiratory_rate",
        }
    }

    /// Unit the value is expressed in
    pub fn unit(&self) -> &'static str {
        match self {
            VitalSignType::HeartRate => "bpm",
            VitalSignType::BloodPressure => "mmHg",
            VitalSignType::Temperature => "°C",
            VitalSignType::OxygenSaturation => "%",
            VitalSignType::RespiratoryRate => "bpm",
        }
    }

    /// Prefix used when building reading ids
    pub fn id_prefix(&self) -> &'static str {
        match self {
            VitalSignType::HeartRate => "hr",
            VitalSignType::BloodPressure => "bp",
            VitalSignType::Temperature => "temp",
            VitalSignType::OxygenSaturation => "ox",
            VitalSignType::RespiratoryRate => "rr",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            VitalSignType::HeartRate => "Heart rate",
            VitalSignType::BloodPressure => "Blood pressure",
            VitalSignType::Temperature => "Temperature",
            VitalSignType::OxygenSaturation => "Oxygen saturation",
            VitalSignType::RespiratoryRate => "Respiratory rate",
        }
    }
}

impl fmt::Display for VitalSignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalSignType {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VitalSignType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RepositoryError::UnknownCategory(s.to_string()))
    }
}

/// Severity of a reading. Ordered so that `Critical` is the maximum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum VitalSignStatus {
    Normal,
    Warning,
    Critical,
}

impl VitalSignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalSignStatus::Normal => "normal",
            VitalSignStatus::Warning => "warning",
            VitalSignStatus::Critical => "critical",
        }
    }

    /// True for warning and critical readings
    pub fn is_alert(&self) -> bool {
        *self != VitalSignStatus::Normal
    }
}

impl fmt::Display for VitalSignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalSignStatus {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(VitalSignStatus::Normal),
            "warning" => Ok(VitalSignStatus::Warning),
            "critical" => Ok(VitalSignStatus::Critical),
            other => Err(RepositoryError::UnknownStatus(other.to_string())),
        }
    }
}

/// Measured value of a vital sign.
///
/// Serialized as a JSON number, except blood pressure which travels as a
/// `"systolic/diastolic"` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub enum VitalSignValue {
    Numeric(f64),
    BloodPressure { systolic: u16, diastolic: u16 },
}

impl VitalSignValue {
    /// The scalar value, or `None` for blood pressure
    pub fn as_number(&self) -> Option<f64> {
        match self {
            VitalSignValue::Numeric(value) => Some(*value),
            VitalSignValue::BloodPressure { .. } => None,
        }
    }

    /// The (systolic, diastolic) pair, or `None` for scalar values
    pub fn as_blood_pressure(&self) -> Option<(u16, u16)> {
        match self {
            VitalSignValue::BloodPressure { systolic, diastolic } => Some((*systolic, *diastolic)),
            VitalSignValue::Numeric(_) => None,
        }
    }
}

impl fmt::Display for VitalSignValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalSignValue::Numeric(value) => write!(f, "{}", value),
            VitalSignValue::BloodPressure { systolic, diastolic } => write!(f, "{}/{}", systolic, diastolic),
        }
    }
}

impl FromStr for VitalSignValue {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((systolic, diastolic)) = s.split_once('/') {
            let parse = |part: &str| {
                part.trim()
                    .parse::<u16>()
                    .map_err(|_| RepositoryError::ValueParse(format!("invalid blood pressure '{}'", s)))
            };
            return Ok(VitalSignValue::BloodPressure {
                systolic: parse(systolic)?,
                diastolic: parse(diastolic)?,
            });
        }

        s.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(VitalSignValue::Numeric)
            .ok_or_else(|| RepositoryError::ValueParse(format!("invalid measurement '{}'", s)))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl From<VitalSignValue> for RawValue {
    fn from(value: VitalSignValue) -> Self {
        match value {
            VitalSignValue::Numeric(number) => RawValue::Number(number),
            bp @ VitalSignValue::BloodPressure { .. } => RawValue::Text(bp.to_string()),
        }
    }
}

impl TryFrom<RawValue> for VitalSignValue {
    type Error = RepositoryError;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        match raw {
            RawValue::Number(number) => Ok(VitalSignValue::Numeric(number)),
            RawValue::Text(text) => text.parse(),
        }
    }
}

/// Storage model for a single timestamped measurement.
///
/// Deserialization goes through [`VitalSign::new`], so a stored unit or
/// status is ignored and re-derived from the category and value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawVitalSign")]
pub struct VitalSign {
    /// Unique identifier, `<prefix>-<patient id>-<day offset>` for generated data
    pub id: String,

    /// Patient the reading belongs to
    pub patient_id: String,

    /// Measurement category
    #[serde(rename = "type")]
    pub kind: VitalSignType,

    pub value: VitalSignValue,

    pub unit: String,

    /// When the reading was taken
    pub timestamp: DateTime<Utc>,

    /// Severity derived from the value at creation time
    pub status: VitalSignStatus,
}

impl VitalSign {
    /// Build a reading, deriving its unit and status.
    ///
    /// Fails when the value shape does not fit the category, e.g. a scalar
    /// given for blood pressure.
    pub fn new(
        id: impl Into<String>,
        patient_id: impl Into<String>,
        kind: VitalSignType,
        value: VitalSignValue,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, RepositoryError> {
        let status = thresholds::classify(kind, &value)?;

        Ok(Self {
            id: id.into(),
            patient_id: patient_id.into(),
            kind,
            value,
            unit: kind.unit().to_string(),
            timestamp,
            status,
        })
    }
}

#[derive(Deserialize)]
struct RawVitalSign {
    id: String,
    patient_id: String,
    #[serde(rename = "type")]
    kind: VitalSignType,
    value: VitalSignValue,
    timestamp: DateTime<Utc>,
}

impl TryFrom<RawVitalSign> for VitalSign {
    type Error = RepositoryError;

    fn try_from(raw: RawVitalSign) -> Result<Self, Self::Error> {
        VitalSign::new(raw.id, raw.patient_id, raw.kind, raw.value, raw.timestamp)
    }
}

/// Number of abnormal latest readings across all patients
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertCounts {
    pub warning: usize,
    pub critical: usize,
}

impl AlertCounts {
    /// Count one reading of the given status
    pub fn record(&mut self, status: VitalSignStatus) {
        match status {
            VitalSignStatus::Warning => self.warning += 1,
            VitalSignStatus::Critical => self.critical += 1,
            VitalSignStatus::Normal => {}
        }
    }

    pub fn total(&self) -> usize {
        self.warning + self.critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_new_derives_unit_and_status() {
        let sign = VitalSign::new("hr-1-0", "1", VitalSignType::HeartRate, VitalSignValue::Numeric(45.0), at())
            .unwrap();
        assert_eq!(sign.unit, "bpm");
        assert_eq!(sign.status, VitalSignStatus::Critical);
    }

    #[test]
    fn test_new_rejects_mismatched_value() {
        let result = VitalSign::new(
            "bp-1-0",
            "1",
            VitalSignType::BloodPressure,
            VitalSignValue::Numeric(120.0),
            at(),
        );
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[test]
    fn test_blood_pressure_serializes_as_string() {
        let sign = VitalSign::new(
            "bp-1-0",
            "1",
            VitalSignType::BloodPressure,
            VitalSignValue::BloodPressure { systolic: 128, diastolic: 82 },
            at(),
        )
        .unwrap();

        let json = serde_json::to_value(&sign).unwrap();
        assert_eq!(json["value"], "128/82");
        assert_eq!(json["type"], "blood_pressure");
        assert_eq!(json["status"], "normal");

        let back: VitalSign = serde_json::from_value(json).unwrap();
        assert_eq!(back, sign);
    }

    #[test]
    fn test_numeric_value_serializes_as_number() {
        let json = serde_json::to_value(VitalSignValue::Numeric(36.6)).unwrap();
        assert_eq!(json, serde_json::json!(36.6));
    }

    #[test]
    fn test_value_parse_errors() {
        assert!("12x/80".parse::<VitalSignValue>().is_err());
        assert!("abc".parse::<VitalSignValue>().is_err());
        assert_eq!(
            "140/90".parse::<VitalSignValue>().unwrap(),
            VitalSignValue::BloodPressure { systolic: 140, diastolic: 90 }
        );
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("oxygen_saturation".parse::<VitalSignType>().unwrap(), VitalSignType::OxygenSaturation);
        assert!(matches!(
            "pulse".parse::<VitalSignType>(),
            Err(RepositoryError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("critical".parse::<VitalSignStatus>().unwrap(), VitalSignStatus::Critical);
        assert_eq!("normal".parse::<VitalSignStatus>().unwrap(), VitalSignStatus::Normal);
        assert_eq!(
            "severe".parse::<VitalSignStatus>(),
            Err(RepositoryError::UnknownStatus("severe".to_string()))
        );
    }

    #[test]
    fn test_deserialize_rejects_value_of_wrong_shape() {
        let json = serde_json::json!({
            "id": "hr-1-0",
            "patient_id": "1",
            "type": "heart_rate",
            "value": "120/80",
            "unit": "bpm",
            "timestamp": "2025-03-01T08:00:00Z",
            "status": "normal"
        });
        assert!(serde_json::from_value::<VitalSign>(json).is_err());
    }

    #[test]
    fn test_deserialize_rederives_status_and_unit() {
        let json = serde_json::json!({
            "id": "hr-1-0",
            "patient_id": "1",
            "type": "heart_rate",
            "value": 45.0,
            "unit": "mmHg",
            "timestamp": "2025-03-01T08:00:00Z",
            "status": "normal"
        });
        let sign: VitalSign = serde_json::from_value(json).unwrap();
        assert_eq!(sign.status, VitalSignStatus::Critical);
        assert_eq!(sign.unit, "bpm");
        assert_eq!(sign.timestamp, at());
    }

    #[test]
    fn test_new_rejects_nan() {
        let result = VitalSign::new("hr-1-0", "1", VitalSignType::HeartRate, VitalSignValue::Numeric(f64::NAN), at());
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[test]
    fn test_status_ordering() {
        assert!(VitalSignStatus::Critical > VitalSignStatus::Warning);
        assert!(VitalSignStatus::Warning > VitalSignStatus::Normal);
        assert!(!VitalSignStatus::Normal.is_alert());
    }

    #[test]
    fn test_alert_counts_record() {
        let mut counts = AlertCounts::default();
        counts.record(VitalSignStatus::Warning);
        counts.record(VitalSignStatus::Critical);
        counts.record(VitalSignStatus::Normal);
        assert_eq!(counts, AlertCounts { warning: 1, critical: 1 });
        assert_eq!(counts.total(), 2);
    }
}
