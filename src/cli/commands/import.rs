use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::import::read_json;
use crate::ui::messages::{confirm, info, success};

/// Import a JSON dump, replacing the whole log after confirmation.
/// A malformed payload is rejected and the current log left untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        //
        // 1. Parse and validate the incoming payload
        //
        let incoming = read_json(file)?;

        //
        // 2. Explicit confirmation naming the record count
        //
        if !*yes {
            let question = format!(
                "Found {} records. Replace the current log with them?",
                incoming.len()
            );
            if !confirm(&question)? {
                info("Import cancelled");
                return Ok(());
            }
        }

        //
        // 3. Wholesale replacement
        //
        let mut log = super::open_log(cfg);
        let n = log.replace_all(incoming)?;

        success(format!("Restored {} episodes", n));
    }

    Ok(())
}
