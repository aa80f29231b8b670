use crate::config::Config;
use crate::errors::AppResult;
use crate::stats;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use chrono::Local;

/// Dashboard view: last episode, elapsed time since it, today's count.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let log = super::open_log(cfg);
    let now = Local::now();

    println!();

    if log.is_empty() {
        println!("{}• Last episode:{} {}--:--{}", CYAN, RESET, GREY, RESET);
        println!("{}• Today:{} 0 episodes", CYAN, RESET);
        println!();
        return Ok(());
    }

    let last = &log.episodes()[0];
    println!("{}• Last episode:{} {} {}", CYAN, RESET, last.date, last.time);

    if let Some((h, m)) = stats::time_since(log.episodes(), now) {
        println!("{}• Time since:{} {}h {}m", CYAN, RESET, h, m);
    }

    let today_count = stats::daily_count_for(log.episodes(), now.date_naive());
    println!(
        "{}• Today:{} {}{}{} episodes",
        CYAN, RESET, GREEN, today_count, RESET
    );

    println!();
    Ok(())
}
