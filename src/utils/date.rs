use chrono::{DateTime, Days, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Today and the n-1 preceding local calendar days, newest first.
pub fn last_n_days(today: NaiveDate, n: u64) -> Vec<NaiveDate> {
    (0..n).map(|i| today - Days::new(i)).collect()
}

pub fn local_from_millis(ts: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(ts).map(|dt| dt.with_timezone(&Local))
}
