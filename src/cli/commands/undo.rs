use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Remove the most recent episode. Safe no-op on an empty log.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut log = super::open_log(cfg);

    match log.remove_newest()? {
        Some(ep) => success(format!("Removed episode of {} {}", ep.date, ep.time)),
        None => info("Nothing to undo, the log is empty"),
    }

    Ok(())
}
