use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Delete an episode by id. An unknown id is reported but is not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut log = super::open_log(cfg);

        if log.delete(id)? {
            success(format!("Deleted episode {}", id));
        } else {
            warning(format!("No episode with id {}", id));
        }
    }

    Ok(())
}
