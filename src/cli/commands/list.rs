use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::time::format_hm;

/// List the episodes of one local calendar day, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: day_arg } = cmd {
        let day = match day_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let log = super::open_log(cfg);
        let key = day.format("%Y-%m-%d").to_string();
        let rows: Vec<_> = log.episodes().iter().filter(|e| e.date == key).collect();

        if rows.is_empty() {
            info(format!("No episodes on {}", day));
            return Ok(());
        }

        println!("📅 Episodes on {}:", day);
        for ep in rows {
            let interval = ep
                .interval
                .map(format_hm)
                .unwrap_or_else(|| "-".to_string());
            let notes_mark = if ep.notes.is_empty() { "" } else { " 📝" };
            println!("   {}  {:>8}  {}{}", ep.time, interval, ep.id, notes_mark);
        }
    }

    Ok(())
}
