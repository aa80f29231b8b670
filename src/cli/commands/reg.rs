use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

/// Register an episode happening right now.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut log = super::open_log(cfg);

    let now = Local::now();
    log.add(now)?;

    success(format!("Episode registered at {}", now.format("%H:%M")));
    Ok(())
}
