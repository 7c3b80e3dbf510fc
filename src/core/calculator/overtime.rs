//! Per-day metrics under an overtime policy.
//!
//! Pure functions: the same record and policy always give the same result,
//! so callers recompute freely (listing, dashboard, export) without caching.

use crate::models::day_metrics::{DayMetrics, IncompleteReason};
use crate::models::day_record::DayRecord;
use crate::models::policy::Policy;
use crate::utils::date::is_weekend;
use crate::utils::time::to_minutes;
use chrono::NaiveDate;

/// Lunch length in minutes. Zero when either lunch punch is missing, when the
/// window is inverted, or when the policy disables the deduction.
pub fn lunch_minutes(record: &DayRecord, policy: &Policy) -> i64 {
    if !policy.lunch_deduction_enabled {
        return 0;
    }
    match (record.lunch_out, record.lunch_in) {
        (Some(out), Some(back)) => (to_minutes(back) - to_minutes(out)).max(0),
        _ => 0,
    }
}

/// Worked, overtime and lunch minutes for one day.
///
/// - missing entry or exit → `Incomplete`
/// - exit before entry → `Incomplete(InvertedSpan)`
/// - weekend with full-overtime policy → every worked minute is overtime
/// - otherwise overtime is what exceeds the weekday threshold
///
/// The daily cap, when configured, bounds the overtime of any day.
pub fn compute_day_metrics(date: NaiveDate, record: &DayRecord, policy: &Policy) -> DayMetrics {
    let (entry, exit) = match (record.entry, record.exit) {
        (None, _) => {
            return DayMetrics::Incomplete {
                reason: IncompleteReason::MissingEntry,
            };
        }
        (_, None) => {
            return DayMetrics::Incomplete {
                reason: IncompleteReason::MissingExit,
            };
        }
        (Some(e), Some(x)) => (e, x),
    };

    let span = to_minutes(exit) - to_minutes(entry);
    if span < 0 {
        return DayMetrics::Incomplete {
            reason: IncompleteReason::InvertedSpan,
        };
    }

    let lunch = lunch_minutes(record, policy);
    let worked = (span - lunch).max(0);

    let mut overtime = if is_weekend(date) && policy.weekend_is_full_overtime {
        worked
    } else {
        (worked - policy.weekday_threshold_minutes).max(0)
    };

    if let Some(cap) = policy.daily_overtime_cap_minutes {
        overtime = overtime.min(cap);
    }

    DayMetrics::Complete {
        worked_minutes: worked,
        overtime_minutes: overtime,
        lunch_minutes: lunch,
    }
}

/// Shorthand for records, which already carry their own date.
pub fn record_metrics(record: &DayRecord, policy: &Policy) -> DayMetrics {
    compute_day_metrics(record.date, record, policy)
}
