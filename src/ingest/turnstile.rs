//! Turnstile CSV export.
//!
//! The file is free-form text: every `DD/MM/YYYY HH:MM` substring is one
//! bare punch. Lines without such a substring (the header included) are
//! ignored; a substring that is not a real date or time is skipped.

use super::ParsedBatch;
use crate::errors::{AppError, AppResult};
use crate::models::punch::{Punch, PunchSource};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

const PUNCH_PATTERN: &str = r"(\d{2})/(\d{2})/(\d{4})\s+(\d{2}):(\d{2})";

fn punch_regex() -> AppResult<Regex> {
    Regex::new(PUNCH_PATTERN).map_err(|e| AppError::Other(format!("invalid punch pattern: {e}")))
}

pub fn parse_turnstile(content: &str) -> AppResult<ParsedBatch> {
    let re = punch_regex()?;
    let mut batch = ParsedBatch::default();

    for line in content.lines() {
        for caps in re.captures_iter(line) {
            let num = |i: usize| caps[i].parse::<u32>().ok();

            let date = match (num(3), num(2), num(1)) {
                (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y as i32, m, d),
                _ => None,
            };
            let time = match (num(4), num(5)) {
                (Some(h), Some(mi)) => NaiveTime::from_hms_opt(h, mi, 0),
                _ => None,
            };

            match (date, time) {
                (Some(d), Some(t)) => batch
                    .punches
                    .push(Punch::unstructured(d, t, PunchSource::Csv)),
                _ => batch.skipped += 1,
            }
        }
    }

    Ok(batch)
}
