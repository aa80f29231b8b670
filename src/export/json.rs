use crate::errors::{AppError, AppResult};
use crate::models::episode::Episode;

/// Full-fidelity structured dump of the raw episode sequence.
pub fn write_json(path: &str, episodes: &[Episode]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(episodes)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
