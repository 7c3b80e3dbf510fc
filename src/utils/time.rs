//! Time utilities: parsing HH:MM, minute offsets, duration formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Minutes since midnight. Total order for times within one day.
pub fn to_minutes(t: NaiveTime) -> i64 {
    t.hour() as i64 * 60 + t.minute() as i64
}

/// Drop seconds and sub-seconds: punches are minute-granular.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn format_optional_time(t: Option<NaiveTime>) -> String {
    t.map(format_time).unwrap_or_else(|| "-".to_string())
}

/// Renders the absolute value as `{H}h {MM}min`.
/// Signs are the caller's business.
pub fn format_duration(mins: i64) -> String {
    let m = mins.abs();
    format!("{}h {:02}min", m / 60, m % 60)
}

/// Parse a duration given as plain minutes (`528`), hours (`8h`),
/// hours+minutes (`8h48`, `8h48m`) or minutes with suffix (`45m`).
pub fn parse_duration_minutes(s: &str) -> AppResult<i64> {
    let raw = s.trim().to_lowercase();
    let invalid = || AppError::InvalidDuration(s.to_string());

    if raw.is_empty() {
        return Err(invalid());
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Ok(n);
    }

    if let Some((h, rest)) = raw.split_once('h') {
        let hours: i64 = h.trim().parse().map_err(|_| invalid())?;
        let rest = rest.trim().trim_end_matches("min").trim_end_matches('m');
        let minutes: i64 = if rest.is_empty() {
            0
        } else {
            rest.parse().map_err(|_| invalid())?
        };
        if !(0..60).contains(&minutes) {
            return Err(invalid());
        }
        let sign = if hours < 0 || h.trim().starts_with('-') { -1 } else { 1 };
        return Ok(hours * 60 + sign * minutes);
    }

    let mins = raw.trim_end_matches("min").trim_end_matches('m');
    mins.parse().map_err(|_| invalid())
}
