use crate::config::Config;
use crate::errors::AppResult;
use crate::stats;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use crate::utils::time::format_hm;
use chrono::Local;

fn fmt_interval(v: Option<i64>) -> String {
    match v {
        Some(m) => format_hm(m),
        None => format!("{}--{}", GREY, RESET),
    }
}

/// Overall statistics over the whole log.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let log = super::open_log(cfg);
    let s = stats::overall_stats(log.episodes(), Local::now());

    println!();
    println!(
        "{}• Total episodes:{} {}{}{}",
        CYAN, RESET, GREEN, s.total, RESET
    );
    println!("{}• Daily average:{} {}", CYAN, RESET, s.daily_avg);
    println!(
        "{}• Interval avg:{} {}",
        CYAN,
        RESET,
        fmt_interval(s.interval_avg)
    );
    println!(
        "{}• Interval min:{} {}",
        CYAN,
        RESET,
        fmt_interval(s.interval_min)
    );
    println!(
        "{}• Interval max:{} {}",
        CYAN,
        RESET,
        fmt_interval(s.interval_max)
    );
    println!();

    Ok(())
}
