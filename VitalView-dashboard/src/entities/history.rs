use chrono::{DateTime, Utc};
use serde::Serialize;

use vital_view_domain::entities::{HistoryEntry, VitalSignStatus, VitalSignType};

/// One row of the history table, with display-ready value and date
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,

    #[serde(rename = "type")]
    pub kind: VitalSignType,

    /// Human readable category name
    pub label: String,

    /// Value as shown in the table, e.g. "128/82"
    pub value: String,

    pub unit: String,
    pub status: VitalSignStatus,
    pub timestamp: DateTime<Utc>,

    /// "dd/mm/yyyy HH:MM"
    pub recorded_at: String,
}

impl From<HistoryEntry> for HistoryRow {
    fn from(entry: HistoryEntry) -> Self {
        let sign = entry.sign;
        Self {
            recorded_at: sign.timestamp.format("%d/%m/%Y %H:%M").to_string(),
            label: sign.kind.label().to_string(),
            value: sign.value.to_string(),
            id: sign.id,
            patient_id: sign.patient_id,
            patient_name: entry.patient_name,
            kind: sign.kind,
            unit: sign.unit,
            status: sign.status,
            timestamp: sign.timestamp,
        }
    }
}
