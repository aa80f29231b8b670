use crate::config::Config;
use crate::errors::AppResult;
use crate::stats;
use crate::utils::date;
use crate::utils::time::format_hm;

/// Rolling three-day report: today, yesterday and the day before, each
/// with its episode count and filtered average interval.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let log = super::open_log(cfg);
    let days = stats::weekly_report(log.episodes(), date::today());

    println!("📅 Last three days:");
    for day in days {
        let avg = match day.avg_interval {
            Some(m) => format_hm(m),
            None => "-".to_string(),
        };
        println!(
            "   {}  {:>2} eps  {:>8}",
            day.date.format("%d/%m/%Y"),
            day.count,
            avg
        );
    }

    Ok(())
}
