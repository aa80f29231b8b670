use crate::errors::{AppError, AppResult};
use crate::models::episode::Episode;
use std::fs;

/// Read a JSON dump and validate it is a sequence of episode records.
/// The log itself is untouched here; replacement happens in the caller
/// after explicit user confirmation.
pub fn read_json(path: &str) -> AppResult<Vec<Episode>> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Import(format!("not a valid episode dump: {}", e)))
}
