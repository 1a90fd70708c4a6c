use serde::{Deserialize, Serialize};

use vital_view_data::models::{VitalSign, VitalSignStatus, VitalSignType};

/// Filters for the history table. `None` means "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryFilter {
    pub patient_id: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<VitalSignType>,

    pub status: Option<VitalSignStatus>,
}

impl HistoryFilter {
    /// Whether a reading passes every active filter
    pub fn matches(&self, sign: &VitalSign) -> bool {
        self.patient_id.as_deref().map_or(true, |id| sign.patient_id == id)
            && self.kind.map_or(true, |kind| sign.kind == kind)
            && self.status.map_or(true, |status| sign.status == status)
    }
}

/// One row of the history table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// "First Last", or "Unknown" when the patient is not on file
    pub patient_name: String,

    #[serde(flatten)]
    pub sign: VitalSign,
}
