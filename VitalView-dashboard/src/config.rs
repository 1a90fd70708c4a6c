use std::env;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use vital_view_data::repository::{GenerationConfig, DEFAULT_HISTORY_DAYS};
use vital_view_domain::auth::{CredentialGate, DEFAULT_DOCTOR_EMAIL, DEFAULT_DOCTOR_PASSWORD};

pub const ENV_SEED: &str = "VITALVIEW_SEED";
pub const ENV_HISTORY_DAYS: &str = "VITALVIEW_HISTORY_DAYS";
pub const ENV_DOCTOR_EMAIL: &str = "VITALVIEW_DOCTOR_EMAIL";
pub const ENV_DOCTOR_PASSWORD: &str = "VITALVIEW_DOCTOR_PASSWORD";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be an unsigned integer, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("{0} must be at least 1")]
    Zero(&'static str),
}

/// Runtime configuration for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardConfig {
    /// Seed for a reproducible dataset
    pub seed: Option<u64>,

    /// Days of history to generate
    pub history_days: u32,

    /// Email accepted by the login gate
    pub doctor_email: String,

    /// Password accepted by the login gate
    #[serde(skip)]
    pub doctor_password: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_days: DEFAULT_HISTORY_DAYS,
            doctor_email: DEFAULT_DOCTOR_EMAIL.to_string(),
            doctor_password: DEFAULT_DOCTOR_PASSWORD.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = match lookup(ENV_SEED) {
            Some(raw) => Some(parse_number::<u64>(ENV_SEED, &raw)?),
            None => None,
        };

        let history_days = match lookup(ENV_HISTORY_DAYS) {
            Some(raw) => parse_number::<u32>(ENV_HISTORY_DAYS, &raw)?,
            None => defaults.history_days,
        };

        let config = Self {
            seed,
            history_days,
            doctor_email: lookup(ENV_DOCTOR_EMAIL).unwrap_or(defaults.doctor_email),
            doctor_password: lookup(ENV_DOCTOR_PASSWORD).unwrap_or(defaults.doctor_password),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that parsing alone does not cover
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_days == 0 {
            return Err(ConfigError::Zero(ENV_HISTORY_DAYS));
        }
        Ok(())
    }

    /// Dataset generation parameters, anchored at `now`
    pub fn generation(&self, now: DateTime<Utc>) -> GenerationConfig {
        GenerationConfig {
            days: self.history_days,
            anchor: now,
            seed: self.seed,
        }
    }

    /// Login gate built from the configured credentials
    pub fn credential_gate(&self) -> CredentialGate {
        CredentialGate::new(self.doctor_email.clone(), self.doctor_password.clone())
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::NotANumber {
        name,
        value: raw.to_string(),
    })
}
