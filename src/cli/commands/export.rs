use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat, notify_export_success};
use std::path::Path;

/// Export the episode log to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file } = cmd {
        let log = super::open_log(cfg);

        if log.is_empty() {
            return Err(AppError::Export("no episodes to export".to_string()));
        }

        match format {
            ExportFormat::Csv => export::csv::write_csv(file, log.episodes())?,
            ExportFormat::Json => export::json::write_json(file, log.episodes())?,
        }

        notify_export_success(format.as_str(), Path::new(file));
    }

    Ok(())
}
