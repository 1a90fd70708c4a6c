use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::entities::{
    AttentionItem, DailyActivity, Patient, VitalSign, VitalSignStatus, VitalSignType, VitalSignValue,
};

/// Worst status among the given readings, `Normal` when there are none
pub fn worst_status<'a>(signs: impl IntoIterator<Item = &'a VitalSign>) -> VitalSignStatus {
    signs
        .into_iter()
        .map(|sign| sign.status)
        .max()
        .unwrap_or(VitalSignStatus::Normal)
}

/// Build the attention entry for a patient, if any latest reading is abnormal
pub fn attention_item(patient: &Patient, latest: &BTreeMap<VitalSignType, VitalSign>) -> Option<AttentionItem> {
    let alerts: Vec<VitalSignType> = latest
        .values()
        .filter(|sign| sign.status.is_alert())
        .map(|sign| sign.kind)
        .collect();

    if alerts.is_empty() {
        return None;
    }

    Some(AttentionItem {
        patient_id: patient.id.clone(),
        patient_name: patient.full_name(),
        display_id: patient.patient_id.clone(),
        status: worst_status(latest.values()),
        alerts,
    })
}

#[derive(Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[derive(Default)]
struct DayTotals {
    heart_rate: Mean,
    temperature: Mean,
    systolic: Mean,
}

/// Per-day means of heart rate, temperature and systolic pressure, oldest day first
pub fn daily_activity(signs: &[VitalSign]) -> Vec<DailyActivity> {
    let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();

    for sign in signs {
        let totals = days.entry(sign.timestamp.date_naive()).or_default();
        match (sign.kind, sign.value) {
            (VitalSignType::HeartRate, VitalSignValue::Numeric(bpm)) => totals.heart_rate.add(bpm),
            (VitalSignType::Temperature, VitalSignValue::Numeric(celsius)) => totals.temperature.add(celsius),
            (VitalSignType::BloodPressure, VitalSignValue::BloodPressure { systolic, .. }) => {
                totals.systolic.add(f64::from(systolic))
            }
            _ => {}
        }
    }

    days.into_iter()
        .map(|(date, totals)| DailyActivity {
            date,
            heart_rate: totals.heart_rate.value(),
            temperature: totals.temperature.value(),
            systolic: totals.systolic.value(),
        })
        .collect()
}
