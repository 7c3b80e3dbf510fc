//! Punch reconciliation: folds a batch of raw punches into canonical
//! per-day records.
//!
//! Rules, per date:
//! - structured punches are applied before bare ones, in input order;
//! - a structured punch fills a null field or replaces a value inferred from
//!   bare punches. A field already written by a structured punch keeps its
//!   first value: the same time is a duplicate, another time is a conflict
//!   and changes nothing;
//! - a bare punch already recorded for the date is a duplicate. Otherwise it
//!   widens `entry` to the earliest and `exit` to the latest time seen,
//!   leaving fields written by structured punches alone;
//! - an inferred `entry`/`exit` never crosses the other one: it is clamped
//!   to it instead. Only two structured values can form an inverted span;
//! - lunch fields are never inferred.
//!
//! The whole batch works on an in-memory copy; callers persist the result
//! with a single save.

use crate::models::day_record::DayRecord;
use crate::models::punch::{Punch, PunchKind};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome counters of one ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub applied: usize,
    pub duplicates: usize,
    /// Structured punches rejected because their field already held another time.
    pub conflicts: usize,
    /// Malformed input rejected before reconciliation.
    pub skipped: usize,
}

impl ImportSummary {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// Full record set, sorted by date, empty records removed.
    pub records: Vec<DayRecord>,
    pub summary: ImportSummary,
}

enum Outcome {
    Applied,
    Duplicate,
    Conflict,
}

fn apply_structured(record: &mut DayRecord, kind: PunchKind, time: NaiveTime) -> Outcome {
    let explicit = record.is_explicit(kind);
    match record.get(kind) {
        Some(existing) if explicit && existing == time => return Outcome::Duplicate,
        Some(_) if explicit => return Outcome::Conflict,
        // inferred value: keep it as a seen punch so re-imports still dedup
        Some(inferred) => {
            record.punches.insert(inferred);
        }
        None => {}
    }

    record.set(kind, time);
    record.explicit.insert(kind);
    settle_span(record);
    Outcome::Applied
}

fn apply_unstructured(record: &mut DayRecord, time: NaiveTime) -> Outcome {
    if record.has_time(time) {
        return Outcome::Duplicate;
    }

    record.punches.insert(time);

    if !record.is_explicit(PunchKind::Entry) && record.entry.is_none_or(|e| time < e) {
        record.entry = Some(time);
    }
    if !record.is_explicit(PunchKind::Exit) && record.exit.is_none_or(|x| time > x) {
        record.exit = Some(time);
    }
    settle_span(record);

    Outcome::Applied
}

/// Clamp an inferred bound that ended up on the wrong side of the other one.
fn settle_span(record: &mut DayRecord) {
    let (Some(entry), Some(exit)) = (record.entry, record.exit) else {
        return;
    };
    if exit >= entry {
        return;
    }
    if !record.is_explicit(PunchKind::Exit) {
        record.exit = Some(entry);
    } else if !record.is_explicit(PunchKind::Entry) {
        record.entry = Some(exit);
    }
}

/// Reconcile `punches` against `existing` records.
///
/// Records in `existing` are assumed to have unique dates (the store
/// guarantees it); should two share a date they are merged first.
pub fn reconcile(existing: Vec<DayRecord>, punches: &[Punch]) -> Reconciliation {
    let mut by_date: BTreeMap<NaiveDate, DayRecord> = BTreeMap::new();
    for record in existing {
        by_date
            .entry(record.date)
            .and_modify(|r| r.absorb(&record))
            .or_insert(record);
    }

    let mut batches: BTreeMap<NaiveDate, Vec<&Punch>> = BTreeMap::new();
    for punch in punches {
        batches.entry(punch.date()).or_default().push(punch);
    }

    let mut summary = ImportSummary::default();

    for (date, day_punches) in batches {
        let record = by_date
            .entry(date)
            .or_insert_with(|| DayRecord::new(date));

        let structured = day_punches.iter().filter_map(|p| match p {
            Punch::Structured { time, kind, .. } => Some((*kind, *time)),
            Punch::Unstructured { .. } => None,
        });
        let mut outcomes: Vec<Outcome> = structured
            .map(|(kind, time)| apply_structured(record, kind, time))
            .collect();

        for p in &day_punches {
            if let Punch::Unstructured { time, .. } = p {
                outcomes.push(apply_unstructured(record, *time));
            }
        }

        for outcome in outcomes {
            match outcome {
                Outcome::Applied => summary.applied += 1,
                Outcome::Duplicate => summary.duplicates += 1,
                Outcome::Conflict => summary.conflicts += 1,
            }
        }
    }

    let records = by_date.into_values().filter(|r| !r.is_empty()).collect();

    Reconciliation { records, summary }
}
