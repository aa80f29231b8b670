//! Statistics Engine: pure functions over a snapshot of the episode log.
//! No mutation, no side effects; "today"/"now" are passed in so results
//! stay deterministic under test.

use crate::models::episode::Episode;
use crate::utils::date::last_n_days;
use chrono::{DateTime, Local, NaiveDate, Timelike};
use std::cmp::Reverse;

/// Episodes earlier than 08:00 local never enter the rolling-report
/// interval averages (they still count toward the day's total).
pub const DAY_WINDOW_START_MIN: u32 = 480;

/// How many calendar days the rolling report covers (today included).
pub const REPORT_DAYS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub count: usize,
    pub avg_interval: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverallStats {
    pub total: usize,
    /// Episodes per day since the first one, formatted to one decimal.
    pub daily_avg: String,
    pub interval_avg: Option<i64>,
    pub interval_min: Option<i64>,
    pub interval_max: Option<i64>,
}

/// Number of episodes on one local calendar day.
pub fn daily_count_for(episodes: &[Episode], date: NaiveDate) -> usize {
    let key = date.format("%Y-%m-%d").to_string();
    episodes.iter().filter(|e| e.date == key).count()
}

/// Rolling report over today and the two preceding local calendar days,
/// in that fixed order. Each day carries its total episode count and the
/// floored average gap between consecutive episodes at or after 08:00;
/// days with fewer than two qualifying episodes report no average.
pub fn weekly_report(episodes: &[Episode], today: NaiveDate) -> Vec<DayReport> {
    last_n_days(today, REPORT_DAYS)
        .into_iter()
        .map(|day| {
            let key = day.format("%Y-%m-%d").to_string();

            let mut day_episodes: Vec<&Episode> =
                episodes.iter().filter(|e| e.date == key).collect();
            day_episodes.sort_by_key(|e| e.timestamp);

            let qualifying: Vec<&Episode> = day_episodes
                .iter()
                .copied()
                .filter(|e| {
                    e.local_datetime()
                        .map(|dt| dt.hour() * 60 + dt.minute() >= DAY_WINDOW_START_MIN)
                        .unwrap_or(false)
                })
                .collect();

            let gaps: Vec<i64> = qualifying
                .windows(2)
                .map(|w| (w[1].timestamp - w[0].timestamp).div_euclid(60_000))
                .collect();

            let avg_interval = if gaps.is_empty() {
                None
            } else {
                Some(gaps.iter().sum::<i64>().div_euclid(gaps.len() as i64))
            };

            DayReport {
                date: day,
                count: day_episodes.len(),
                avg_interval,
            }
        })
        .collect()
}

/// Whole-log statistics: total count, daily average since the first
/// episode, and min/avg/max over every consecutive gap. Unlike the
/// rolling report, no time-of-day filter applies here.
pub fn overall_stats(episodes: &[Episode], now: DateTime<Local>) -> OverallStats {
    let total = episodes.len();

    // Elapsed days are rounded up and floored to one full day, so a log
    // started earlier today still divides by 1.
    let daily_avg = match episodes.iter().map(|e| e.timestamp).min() {
        Some(first_ts) => {
            let elapsed_ms = (now.timestamp_millis() - first_ts).max(0);
            let days = (elapsed_ms as u64).div_ceil(86_400_000).max(1);
            format!("{:.1}", total as f64 / days as f64)
        }
        None => "0.0".to_string(),
    };

    let mut ordered: Vec<i64> = episodes.iter().map(|e| e.timestamp).collect();
    ordered.sort_unstable_by_key(|t| Reverse(*t));

    let gaps_ms: Vec<i64> = ordered.windows(2).map(|w| w[0] - w[1]).collect();

    let (interval_avg, interval_min, interval_max) = if gaps_ms.is_empty() {
        (None, None, None)
    } else {
        let mut sum = 0i64;
        let mut min = gaps_ms[0];
        let mut max = gaps_ms[0];
        for g in &gaps_ms {
            sum += g;
            min = min.min(*g);
            max = max.max(*g);
        }
        let avg = (sum.div_euclid(gaps_ms.len() as i64)).div_euclid(60_000);
        (
            Some(avg),
            Some(min.div_euclid(60_000)),
            Some(max.div_euclid(60_000)),
        )
    };

    OverallStats {
        total,
        daily_avg,
        interval_avg,
        interval_min,
        interval_max,
    }
}

/// Elapsed time since the newest episode, as whole hours plus remaining
/// minutes. None on an empty log.
pub fn time_since(episodes: &[Episode], now: DateTime<Local>) -> Option<(i64, i64)> {
    let newest = episodes.iter().map(|e| e.timestamp).max()?;
    let mins = (now.timestamp_millis() - newest).div_euclid(60_000);
    Some((mins.div_euclid(60), mins.rem_euclid(60)))
}
