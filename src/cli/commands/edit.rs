use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time;

/// Edit an episode's time of day and notes. The calendar date never
/// changes; an unknown id is reported but is not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, time: t, notes } = cmd {
        //
        // 1. Parse the new time of day
        //
        let new_time = time::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;

        //
        // 2. Resolve the notes: omitted --notes keeps the current ones
        //
        let mut log = super::open_log(cfg);
        let new_notes = match notes {
            Some(n) => n.clone(),
            None => log.find(id).map(|e| e.notes.clone()).unwrap_or_default(),
        };

        //
        // 3. Apply
        //
        if log.edit(id, new_time, &new_notes)? {
            success(format!("Episode {} moved to {}", id, new_time.format("%H:%M")));
        } else {
            warning(format!("No episode with id {}", id));
        }
    }

    Ok(())
}
