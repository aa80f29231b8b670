use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Initialize the configuration and an empty episode log.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.storage.clone(), cli.test)?;
    Ok(())
}
