//! Weekly and period roll-ups over canonical day records.
//!
//! Only complete days (entry and exit present, exit not before entry) count
//! towards sums and day counts.

use crate::core::calculator::overtime::record_metrics;
use crate::models::aggregate::{PeriodSummary, TodayStatus, WeekAggregate, WeekdayTotal};
use crate::models::day_metrics::DayMetrics;
use crate::models::day_record::DayRecord;
use crate::models::policy::Policy;
use crate::utils::date::{iso_week_key, weekday_label};
use crate::utils::time::to_minutes;
use chrono::{Datelike, NaiveTime, Weekday};
use std::collections::BTreeMap;

#[derive(Default)]
struct Bucket {
    days: i64,
    worked: i64,
    overtime: i64,
}

fn average(total: i64, days: i64) -> i64 {
    if days > 0 { total.div_euclid(days) } else { 0 }
}

/// Group records by ISO-8601 week (Monday-anchored, Thursday rule for the
/// year) and sum their complete days. Weeks are returned in ascending order;
/// weeks without any complete day are omitted.
pub fn weekly_aggregates<'a, I>(records: I, policy: &Policy) -> Vec<WeekAggregate>
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    // zero-padded keys sort chronologically
    let mut weeks: BTreeMap<String, Bucket> = BTreeMap::new();

    for record in records {
        if let DayMetrics::Complete {
            worked_minutes,
            overtime_minutes,
            ..
        } = record_metrics(record, policy)
        {
            let bucket = weeks.entry(iso_week_key(record.date)).or_default();
            bucket.days += 1;
            bucket.worked += worked_minutes;
            bucket.overtime += overtime_minutes;
        }
    }

    weeks
        .into_iter()
        .map(|(week_key, b)| {
            let overtime = match policy.weekly_overtime_cap_minutes {
                Some(cap) => b.overtime.min(cap),
                None => b.overtime,
            };
            WeekAggregate {
                week_key,
                days_worked: b.days,
                total_minutes: b.worked,
                overtime_minutes: overtime,
                average_minutes_per_day: average(b.worked, b.days),
            }
        })
        .collect()
}

pub fn period_summary<'a, I>(records: I, policy: &Policy) -> PeriodSummary
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let mut s = PeriodSummary::default();

    for record in records {
        if let DayMetrics::Complete {
            worked_minutes,
            overtime_minutes,
            ..
        } = record_metrics(record, policy)
        {
            s.days_worked += 1;
            s.total_minutes += worked_minutes;
            s.overtime_minutes += overtime_minutes;
            if overtime_minutes > 0 {
                s.days_with_overtime += 1;
            }
        }
    }

    s.average_minutes_per_day = average(s.total_minutes, s.days_worked);
    if s.total_minutes > 0 {
        let pct = s.overtime_minutes as f64 / s.total_minutes as f64 * 100.0;
        s.overtime_percentage = (pct * 10.0).round() / 10.0;
    }
    s
}

/// Worked minutes per weekday, Monday first, always seven entries.
pub fn weekday_distribution<'a, I>(records: I, policy: &Policy) -> Vec<WeekdayTotal>
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    const ORDER: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    let mut totals: Vec<WeekdayTotal> = ORDER
        .iter()
        .map(|d| WeekdayTotal {
            weekday: weekday_label(*d),
            days: 0,
            worked_minutes: 0,
        })
        .collect();

    for record in records {
        if let Some(worked) = record_metrics(record, policy).worked_minutes() {
            let idx = record.date.weekday().num_days_from_monday() as usize;
            totals[idx].days += 1;
            totals[idx].worked_minutes += worked;
        }
    }

    totals
}

/// Time worked so far on a day. With no exit yet, the span runs up to `now`
/// and is reported as open. `None` when the day has no entry.
pub fn today_status(record: &DayRecord, now: NaiveTime, policy: &Policy) -> Option<TodayStatus> {
    let entry = record.entry?;

    if let Some(worked) = record_metrics(record, policy).worked_minutes() {
        return Some(TodayStatus {
            worked_minutes: worked,
            open: false,
        });
    }

    if record.exit.is_some() {
        // inverted span: nothing meaningful to show
        return None;
    }

    // lunch is deducted only once both lunch punches exist
    let open = DayRecord {
        exit: Some(now),
        ..record.clone()
    };
    let worked = match record_metrics(&open, policy).worked_minutes() {
        Some(w) => w,
        None => (to_minutes(now) - to_minutes(entry)).max(0),
    };

    Some(TodayStatus {
        worked_minutes: worked,
        open: true,
    })
}
