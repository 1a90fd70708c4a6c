use chrono::NaiveDate;
use serde::Serialize;

use vital_view_domain::entities::{Gender, Patient};

/// One row of the patient list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PatientSummary {
    pub id: String,

    /// Display id, e.g. "P-10001"
    pub patient_id: String,

    pub name: String,

    /// Avatar initials, e.g. "MS"
    pub initials: String,

    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub age: u32,
    pub blood_type: String,
}

impl PatientSummary {
    /// Build a list row, computing the age on `today`
    pub fn from_patient(patient: &Patient, today: NaiveDate) -> Self {
        let initials = [&patient.first_name, &patient.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        Self {
            id: patient.id.clone(),
            patient_id: patient.patient_id.clone(),
            name: patient.full_name(),
            initials,
            gender: patient.gender,
            birth_date: patient.birth_date,
            age: patient.age_on(today),
            blood_type: patient.blood_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vital_view_data::models::patient::seed_patients;

    #[test]
    fn test_summary_from_patient() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let summary = PatientSummary::from_patient(&seed_patients()[4], today);

        assert_eq!(summary.name, "corbeil afiwa");
        assert_eq!(summary.initials, "CA");
        assert_eq!(summary.patient_id, "P-10005");
        assert_eq!(summary.age, 52);
    }
}
