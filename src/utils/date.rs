//! Calendar helpers. All dates are naive: no time zone, no DST.

use crate::errors::{AppError, AppResult};
use crate::utils::time::truncate_to_minute;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now_time() -> NaiveTime {
    truncate_to_minute(chrono::Local::now().time())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Saturday or Sunday on the proleptic Gregorian calendar.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn weekday_short(date: NaiveDate) -> &'static str {
    weekday_label(date.weekday())
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// ISO-8601 week key, e.g. `2025-W01`.
/// The year is the ISO week-numbering year (Thursday rule), which can differ
/// from the calendar year around New Year.
pub fn iso_week_key(date: NaiveDate) -> String {
    let w = date.iso_week();
    format!("{}-W{:02}", w.year(), w.week())
}

/// `DD/MM/YYYY`
pub fn format_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Parse one side of a period expression into its inclusive bounds.
///
/// - `YYYY`       → whole year
/// - `YYYY-MM`    → whole month
/// - `YYYY-MM-DD` → single day
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let start = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let end = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((start, end))
        }
        7 => {
            let start = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let end = last_day_of_month(start.year(), start.month()).ok_or_else(invalid)?;
            Ok((start, end))
        }
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Parse a range expression into inclusive `(start, end)` bounds.
///
/// Accepts a single period (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or two periods
/// joined by `:` (`2025-01:2025-03`). Both sides of a range must use the same
/// format and the start must not be after the end.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start_raw, end_raw) = (start_raw.trim(), end_raw.trim());
        if start_raw.len() != end_raw.len() {
            return Err(AppError::InvalidPeriod(format!(
                "start and end must have the same format: {r}"
            )));
        }
        let (start, _) = period_bounds(start_raw)?;
        let (_, end) = period_bounds(end_raw)?;
        if start > end {
            return Err(AppError::InvalidPeriod(format!(
                "start date is after end date: {r}"
            )));
        }
        return Ok((start, end));
    }

    period_bounds(r)
}
