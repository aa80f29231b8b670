use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time;

/// Backfill an episode at an arbitrary past date and time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, time: t, notes } = cmd {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        //
        // 2. Parse time (mandatory)
        //
        let parsed_time = time::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;

        //
        // 3. Insert, recalculate and persist
        //
        let mut log = super::open_log(cfg);
        log.add_manual(d, parsed_time, notes.as_deref().unwrap_or(""))?;

        success(format!(
            "Episode added on {} at {}",
            d,
            parsed_time.format("%H:%M")
        ));
    }

    Ok(())
}
