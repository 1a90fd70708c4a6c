use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::errors::RepositoryError;
use crate::models::{Patient, VitalSign, VitalSignType, VitalSignValue};

/// Number of days of history generated when nothing else is configured
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// Parameters for synthetic dataset generation
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// How many calendar days of readings to produce, ending at `anchor`
    pub days: u32,

    /// Timestamp of the newest readings (day offset 0)
    pub anchor: DateTime<Utc>,

    /// Seed for a reproducible dataset; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_HISTORY_DAYS,
            anchor: Utc::now(),
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Build the random source this configuration asks for
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Generate one reading per category, per patient, per day.
///
/// Readings are ordered by day offset (newest day first), then by patient,
/// then by category.
pub fn generate<R: Rng + ?Sized>(
    patients: &[Patient],
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<VitalSign>, RepositoryError> {
    let mut vital_signs = Vec::with_capacity(config.days as usize * patients.len() * VitalSignType::ALL.len());

    for day in 0..config.days {
        let timestamp = config.anchor - Duration::days(i64::from(day));

        for patient in patients {
            for kind in VitalSignType::ALL {
                let value = draw_value(kind, rng);
                let id = format!("{}-{}-{}", kind.id_prefix(), patient.id, day);
                vital_signs.push(VitalSign::new(id, patient.id.clone(), kind, value, timestamp)?);
            }
        }
    }

    debug!(
        patients = patients.len(),
        days = config.days,
        readings = vital_signs.len(),
        "Generated synthetic vital signs"
    );

    Ok(vital_signs)
}

fn draw_value<R: Rng + ?Sized>(kind: VitalSignType, rng: &mut R) -> VitalSignValue {
    match kind {
        VitalSignType::HeartRate => VitalSignValue::Numeric(f64::from(rng.gen_range(60u16..120))),
        VitalSignType::BloodPressure => VitalSignValue::BloodPressure {
            systolic: rng.gen_range(100..160),
            diastolic: rng.gen_range(60..90),
        },
        VitalSignType::Temperature => {
            let celsius: f64 = rng.gen_range(36.0..39.0);
            VitalSignValue::Numeric((celsius * 10.0).round() / 10.0)
        }
        VitalSignType::OxygenSaturation => VitalSignValue::Numeric(f64::from(rng.gen_range(91u16..=100))),
        VitalSignType::RespiratoryRate => VitalSignValue::Numeric(f64::from(rng.gen_range(10u16..25))),
    }
}
