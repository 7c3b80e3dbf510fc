use super::{open_store, report_summary};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ingest::api::parse_api_payload;
use crate::ingest::turnstile::parse_turnstile;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::fs;

fn read_input(file: &str) -> AppResult<String> {
    let content = fs::read_to_string(expand_tilde(file))?;
    Ok(content.trim_start_matches('\u{feff}').to_string())
}

/// `import FILE` (turnstile CSV) and `sync FILE` (saved API response).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (batch, origin, file) = match cmd {
        Commands::Import { file } => (parse_turnstile(&read_input(file)?)?, "import", file),
        Commands::Sync { file } => (parse_api_payload(&read_input(file)?)?, "sync", file),
        _ => return Ok(()),
    };

    info(format!("{} punch(es) read from {file}", batch.punches.len()));
    if batch.is_empty() {
        warning("No punch found in the input");
    }

    let mut store = open_store(cfg)?;
    let summary = ImportLogic::apply(&mut store, &batch, origin)?;
    report_summary(&summary);
    Ok(())
}
