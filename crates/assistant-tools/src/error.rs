//! Error Types for Scheduling Tools

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchedulingError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Occurrence must be a whole number of at least 1, got {0}")]
    InvalidOccurrence(String),

    #[error("Occurrence {occurrence} of {weekday} not found within {horizon_days} days")]
    NotFoundWithinHorizon {
        weekday: String,
        occurrence: u32,
        horizon_days: i64,
    },

    #[error("Invalid time range: start {start} must be before end {end}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),
}
