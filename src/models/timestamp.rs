use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

use crate::errors::AppError;

/// Fixed-width UTC layout: lexical order of stored values equals chronological order.
const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Years outside this range do not print as four digits and would break ordering.
const STORABLE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

pub fn to_storage(instant: DateTime<Utc>) -> Result<String, AppError> {
    if !STORABLE_YEARS.contains(&instant.year()) {
        return Err(AppError::Timestamp(format!(
            "{instant} is outside the storable years 0000-9999"
        )));
    }
    Ok(instant.format(STORAGE_FORMAT).to_string())
}

pub fn from_storage(value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(value, STORAGE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| AppError::Timestamp(format!("{value:?}: {e}")))
}
