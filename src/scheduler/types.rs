use crate::model::DoctorId;
use chrono::NaiveDate;
use thiserror::Error;

/// Même médecin de garde deux jours de suite (constaté après coup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestViolation {
    pub doctor: DoctorId,
    pub first: NaiveDate,
    pub second: NaiveDate,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid roster: {0} has no doctor")]
    InvalidRoster(String),
    #[error("invalid day kind: {0} (expected weekday, weekend or holiday)")]
    InvalidDay(String),
    #[error("duplicate doctor {doctor} in roster {roster}")]
    DuplicateDoctor { roster: String, doctor: String },
    #[error("duplicate roster: {0}")]
    DuplicateRoster(String),
    #[error("unknown roster: {0}")]
    UnknownRoster(String),
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid date range: end must not be before start")]
    InvalidRange,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
