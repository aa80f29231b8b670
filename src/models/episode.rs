use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged occurrence of the tracked event.
///
/// `date`, `time` and `interval` are denormalized: `date`/`time` always
/// restate `timestamp` in local time, `interval` is recomputed over the
/// whole log after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub id: String,
    pub timestamp: i64, // ⇔ milliseconds since epoch, authoritative instant
    pub date: String,   // ⇔ local calendar date "YYYY-MM-DD"
    pub time: String,   // ⇔ local time of day "HH:MM"
    pub interval: Option<i64>, // ⇔ minutes since the preceding episode
    #[serde(default)]
    pub notes: String,
}

impl Episode {
    pub fn new(at: DateTime<Local>, notes: &str) -> Self {
        let mut ep = Self {
            id: Uuid::new_v4().to_string(),
            timestamp: 0,
            date: String::new(),
            time: String::new(),
            interval: None,
            notes: notes.to_string(),
        };
        ep.set_instant(at);
        ep
    }

    /// The single point where `timestamp` and its derived `date`/`time`
    /// move together, so they can never drift apart.
    pub fn set_instant(&mut self, at: DateTime<Local>) {
        self.timestamp = at.timestamp_millis();
        self.date = at.format("%Y-%m-%d").to_string();
        self.time = at.format("%H:%M").to_string();
    }

    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn time_naive(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").ok()
    }

    pub fn local_datetime(&self) -> Option<DateTime<Local>> {
        crate::utils::date::local_from_millis(self.timestamp)
    }
}
