use super::{open_store, report_summary};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::{format_time, parse_optional_time, parse_time};

/// `add DATE TIME [--kind K]` and the `punch K` quick action.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (d, t, kind) = match cmd {
        Commands::Add { date, time, kind } => {
            let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
            let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.clone()))?;
            (d, t, *kind)
        }
        Commands::Punch { kind, date, time } => {
            let d = match date {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };
            let t = parse_optional_time(time.as_ref())?.unwrap_or_else(date::now_time);
            (d, t, Some(*kind))
        }
        _ => return Ok(()),
    };

    let mut store = open_store(cfg)?;
    let summary = AddLogic::apply(&mut store, d, t, kind)?;

    let what = kind.map(|k| k.as_str()).unwrap_or("punch");
    println!("🕘 {} {} {}", date::format_br(d), what, format_time(t));
    report_summary(&summary);
    Ok(())
}
