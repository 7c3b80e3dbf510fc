use super::day_record::DayRecord;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{first_day_of_month, parse_range};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date predicate applied upstream of the per-day computation.
///
/// `today` is always supplied by the caller so filtering stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "periodo", rename_all = "snake_case")]
pub enum PeriodFilter {
    All,
    /// The last `days` days up to and including today.
    LastDays { days: u32 },
    CurrentMonth,
    /// Inclusive on both ends.
    Range { start: NaiveDate, end: NaiveDate },
}

impl Default for PeriodFilter {
    fn default() -> Self {
        PeriodFilter::LastDays { days: 7 }
    }
}

impl PeriodFilter {
    pub fn range(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidPeriod(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(PeriodFilter::Range { start, end })
    }

    /// `all`, `month`, `last:N`, or a range expression understood by
    /// [`parse_range`].
    pub fn from_expr(expr: &str) -> AppResult<Self> {
        let e = expr.trim();
        if e.eq_ignore_ascii_case("all") {
            return Ok(PeriodFilter::All);
        }
        if e.eq_ignore_ascii_case("month") {
            return Ok(PeriodFilter::CurrentMonth);
        }
        if let Some(n) = e.strip_prefix("last:") {
            let days: u32 = n
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidPeriod(expr.to_string()))?;
            return Ok(PeriodFilter::LastDays { days });
        }
        let (start, end) = parse_range(e)?;
        Self::range(start, end)
    }

    /// Inclusive bounds, `None` for an unbounded filter.
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            PeriodFilter::All => None,
            PeriodFilter::LastDays { days } => {
                let start = today
                    .checked_sub_days(Days::new(u64::from(*days)))
                    .unwrap_or(NaiveDate::MIN);
                Some((start, today))
            }
            PeriodFilter::CurrentMonth => {
                let start = first_day_of_month(today);
                let end = crate::utils::date::last_day_of_month(today.year(), today.month())
                    .unwrap_or(today);
                Some((start, end))
            }
            PeriodFilter::Range { start, end } => Some((*start, *end)),
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.bounds(today) {
            None => true,
            Some((start, end)) => date >= start && date <= end,
        }
    }

    pub fn apply<'a>(&self, records: &'a [DayRecord], today: NaiveDate) -> Vec<&'a DayRecord> {
        records
            .iter()
            .filter(|r| self.contains(r.date, today))
            .collect()
    }

    pub fn describe(&self) -> String {
        match self {
            PeriodFilter::All => "all records".to_string(),
            PeriodFilter::LastDays { days } => format!("last {days} days"),
            PeriodFilter::CurrentMonth => "current month".to_string(),
            PeriodFilter::Range { start, end } => format!(
                "{} to {}",
                crate::utils::date::format_br(*start),
                crate::utils::date::format_br(*end)
            ),
        }
    }
}
