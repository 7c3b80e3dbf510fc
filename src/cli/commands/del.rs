use super::{confirm, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Delete one day (`del DATE`) or every record (`del --all`).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: d,
        all,
        yes,
    } = cmd
    {
        let mut store = open_store(cfg)?;

        if *all {
            if !*yes && !confirm("Delete ALL records? This cannot be undone.")? {
                info("Nothing deleted.");
                return Ok(());
            }
            let n = DeleteLogic::clear_all(&mut store)?;
            success(format!("{n} record(s) deleted"));
            return Ok(());
        }

        let raw = d.as_deref().unwrap_or_default();
        let day = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;

        if !*yes && !confirm(&format!("Delete the record of {}?", date::format_br(day)))? {
            info("Nothing deleted.");
            return Ok(());
        }

        DeleteLogic::remove_day(&mut store, day)?;
        success(format!("Record of {} deleted", date::format_br(day)));
    }

    Ok(())
}
