use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Administrative gender recorded for a patient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Storage model for a patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    /// Internal identifier, referenced by every vital sign
    pub id: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    pub gender: Gender,

    pub birth_date: NaiveDate,

    /// ABO/Rh blood group, e.g. "AB+"
    pub blood_type: String,

    /// Identifier shown to clinicians, e.g. "P-10001"
    pub patient_id: String,
}

impl Patient {
    /// Create a new patient record
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        birth_date: NaiveDate,
        blood_type: impl Into<String>,
        patient_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            birth_date,
            blood_type: blood_type.into(),
            patient_id: patient_id.into(),
        }
    }

    /// "First Last", as shown in lists and history rows
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years on the given day
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut age = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }
}

/// The fixed patient list the dataset is generated from
pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient::new("1", "Jean", "con", Gender::Male, seed_date(1975, 5, 12), "A+", "P-10001"),
        Patient::new("2", "Marie", "sansnom", Gender::Female, seed_date(1982, 9, 28), "O-", "P-10002"),
        Patient::new("3", "Thomas", "ifri", Gender::Male, seed_date(1968, 11, 15), "AB+", "P-10003"),
        Patient::new("4", "Sophie", "iot", Gender::Female, seed_date(1990, 3, 4), "B+", "P-10004"),
        Patient::new("5", "corbeil", "afiwa", Gender::Male, seed_date(1972, 7, 22), "A-", "P-10005"),
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed birth dates are valid calendar dates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_patients_have_unique_ids() {
        let patients = seed_patients();
        assert_eq!(patients.len(), 5);

        let mut ids: Vec<&str> = patients.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_full_name() {
        let patients = seed_patients();
        assert_eq!(patients[1].full_name(), "Marie sansnom");
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let patient = &seed_patients()[0]; // born 1975-05-12
        let before = NaiveDate::from_ymd_opt(2025, 5, 11).unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
        assert_eq!(patient.age_on(before), 49);
        assert_eq!(patient.age_on(on), 50);
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
    }
}
