//! Time utilities: parsing HH:MM, composing local instants, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Combine a local calendar date with a time of day into a concrete instant.
/// A time falling inside a DST gap resolves to the earliest valid instant.
pub fn compose_local(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Local>> {
    date.and_time(time)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{} {}", date, time.format("%H:%M"))))
}

pub fn format_hm(mins: i64) -> String {
    format!("{}h {}m", mins.div_euclid(60), mins.rem_euclid(60))
}
