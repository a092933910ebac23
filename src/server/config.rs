use std::str::FromStr;

use chrono::{TimeDelta, Weekday};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::schedule::{SchedulePolicy, TimeOfDay},
};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_JWT_EXPIRE_DAYS: i64 = 7;
const MAX_JWT_EXPIRE_DAYS: i64 = 3650;

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    /// Access token lifetime, from `JWT_EXPIRE_DAYS`.
    pub jwt_ttl: TimeDelta,

    pub port: u16,
    pub environment: Environment,

    pub schedule: SchedulePolicy,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = SchedulePolicy::default();

        let open: TimeOfDay = optional("OPEN_TIME")?.unwrap_or(defaults.open);
        let close: TimeOfDay = optional("CLOSE_TIME")?.unwrap_or(defaults.close);
        if open >= close {
            return Err(ConfigError::InvalidValue {
                name: "CLOSE_TIME".to_string(),
                value: close.to_string(),
                reason: format!("must be later than OPEN_TIME ({})", open),
            }
            .into());
        }

        let slot_minutes: u16 = optional("SLOT_MINUTES")?.unwrap_or(defaults.slot_minutes);
        if slot_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                name: "SLOT_MINUTES".to_string(),
                value: slot_minutes.to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_ttl: jwt_ttl(
                optional("JWT_EXPIRE_DAYS")?.unwrap_or(DEFAULT_JWT_EXPIRE_DAYS),
            )?,
            port: optional("PORT")?.unwrap_or(DEFAULT_PORT),
            environment: optional("APP_ENV")?.unwrap_or(Environment::Development),
            schedule: SchedulePolicy {
                open,
                close,
                slot_minutes,
                closed_weekday: Weekday::Sun,
            },
            seed_demo_data: optional("SEED_DEMO_DATA")?.unwrap_or(false),
        })
    }
}

/// Token lifetime for `days`, which must be between 1 and [`MAX_JWT_EXPIRE_DAYS`].
fn jwt_ttl(days: i64) -> Result<TimeDelta, ConfigError> {
    (1..=MAX_JWT_EXPIRE_DAYS)
        .contains(&days)
        .then(|| TimeDelta::try_days(days))
        .flatten()
        .ok_or_else(|| ConfigError::InvalidValue {
            name: "JWT_EXPIRE_DAYS".to_string(),
            value: days.to_string(),
            reason: format!("must be between 1 and {}", MAX_JWT_EXPIRE_DAYS),
        })
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses `name`, `None` when unset or empty.
fn optional<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map(Some)
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    name: name.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })
        }
        _ => Ok(None),
    }
}
