mod common;
use common::{d, day};
use rpunchlog::core::calculator::overtime::{compute_day_metrics, record_metrics};
use rpunchlog::models::day_metrics::{DayMetrics, IncompleteReason};
use rpunchlog::models::policy::Policy;

// 2025-03-12 is a Wednesday, 2025-03-15 a Saturday, 2025-03-16 a Sunday.

#[test]
fn weekday_overtime_beyond_threshold() {
    let r = day("2025-03-12", Some("08:00"), None, None, Some("18:18"));
    let m = record_metrics(&r, &Policy::default());

    assert_eq!(
        m,
        DayMetrics::Complete {
            worked_minutes: 618,
            overtime_minutes: 90,
            lunch_minutes: 0,
        }
    );
}

#[test]
fn weekday_below_threshold_has_no_overtime() {
    let r = day("2025-03-12", Some("09:00"), None, None, Some("17:00"));
    let m = record_metrics(&r, &Policy::default());

    assert_eq!(m.worked_minutes(), Some(480));
    assert_eq!(m.overtime_minutes(), Some(0));
}

#[test]
fn saturday_is_full_overtime() {
    let r = day("2025-03-15", Some("09:00"), None, None, Some("13:00"));
    let m = record_metrics(&r, &Policy::default());

    assert_eq!(m.worked_minutes(), Some(240));
    assert_eq!(m.overtime_minutes(), Some(240));
}

#[test]
fn sunday_follows_weekday_rule_when_policy_disabled() {
    let policy = Policy {
        weekend_is_full_overtime: false,
        ..Policy::default()
    };
    let r = day("2025-03-16", Some("09:00"), None, None, Some("13:00"));

    assert_eq!(record_metrics(&r, &policy).overtime_minutes(), Some(0));
}

#[test]
fn lunch_is_deducted() {
    let r = day(
        "2025-03-12",
        Some("08:00"),
        Some("12:00"),
        Some("13:00"),
        Some("17:00"),
    );
    let m = record_metrics(&r, &Policy::default());

    assert_eq!(m.lunch_minutes(), Some(60));
    assert_eq!(m.worked_minutes(), Some(480));
    assert_eq!(m.overtime_minutes(), Some(0));
}

#[test]
fn lunch_not_deducted_when_disabled_or_partial() {
    let full = day(
        "2025-03-12",
        Some("08:00"),
        Some("12:00"),
        Some("13:00"),
        Some("17:00"),
    );
    let no_deduction = Policy {
        lunch_deduction_enabled: false,
        ..Policy::default()
    };
    assert_eq!(record_metrics(&full, &no_deduction).worked_minutes(), Some(540));

    let partial = day("2025-03-12", Some("08:00"), Some("12:00"), None, Some("17:00"));
    let m = record_metrics(&partial, &Policy::default());
    assert_eq!(m.lunch_minutes(), Some(0));
    assert_eq!(m.worked_minutes(), Some(540));
}

#[test]
fn inverted_lunch_window_counts_as_zero() {
    let r = day(
        "2025-03-12",
        Some("08:00"),
        Some("13:00"),
        Some("12:00"),
        Some("17:00"),
    );
    let m = record_metrics(&r, &Policy::default());
    assert_eq!(m.lunch_minutes(), Some(0));
    assert_eq!(m.worked_minutes(), Some(540));
}

#[test]
fn lunch_longer_than_span_never_goes_negative() {
    let r = day(
        "2025-03-12",
        Some("12:00"),
        Some("08:00"),
        Some("18:00"),
        Some("13:00"),
    );
    assert_eq!(record_metrics(&r, &Policy::default()).worked_minutes(), Some(0));
}

#[test]
fn missing_entry_or_exit_is_incomplete() {
    let no_exit = day("2025-03-12", Some("08:00"), None, None, None);
    let no_entry = day("2025-03-12", None, Some("12:00"), None, Some("17:00"));

    assert_eq!(
        record_metrics(&no_exit, &Policy::default()),
        DayMetrics::Incomplete {
            reason: IncompleteReason::MissingExit
        }
    );
    assert_eq!(
        record_metrics(&no_entry, &Policy::default()),
        DayMetrics::Incomplete {
            reason: IncompleteReason::MissingEntry
        }
    );
    assert!(!record_metrics(&no_exit, &Policy::default()).is_complete());
}

#[test]
fn exit_before_entry_is_incomplete() {
    let r = day("2025-03-12", Some("22:00"), None, None, Some("06:00"));
    let m = record_metrics(&r, &Policy::default());

    assert_eq!(
        m,
        DayMetrics::Incomplete {
            reason: IncompleteReason::InvertedSpan
        }
    );
    assert_eq!(m.worked_minutes(), None);
}

#[test]
fn zero_length_day_is_complete() {
    let r = day("2025-03-12", Some("08:00"), None, None, Some("08:00"));
    assert_eq!(record_metrics(&r, &Policy::default()).worked_minutes(), Some(0));
}

#[test]
fn daily_cap_bounds_weekday_and_weekend() {
    let policy = Policy {
        daily_overtime_cap_minutes: Some(60),
        ..Policy::default()
    };

    let wed = day("2025-03-12", Some("08:00"), None, None, Some("18:18"));
    let sat = day("2025-03-15", Some("09:00"), None, None, Some("13:00"));

    assert_eq!(record_metrics(&wed, &policy).overtime_minutes(), Some(60));
    assert_eq!(record_metrics(&sat, &policy).overtime_minutes(), Some(60));
}

#[test]
fn custom_threshold() {
    let policy = Policy {
        weekday_threshold_minutes: 480,
        ..Policy::default()
    };
    let r = day("2025-03-12", Some("08:00"), None, None, Some("17:00"));
    assert_eq!(record_metrics(&r, &policy).overtime_minutes(), Some(60));
}

#[test]
fn date_argument_drives_the_weekend_rule() {
    // same times evaluated as a Saturday
    let r = day("2025-03-12", Some("09:00"), None, None, Some("13:00"));
    let m = compute_day_metrics(d("2025-03-15"), &r, &Policy::default());
    assert_eq!(m.overtime_minutes(), Some(240));
}

#[test]
fn metrics_are_deterministic() {
    let r = day(
        "2025-03-12",
        Some("07:45"),
        Some("11:50"),
        Some("13:05"),
        Some("19:02"),
    );
    let p = Policy::default();
    assert_eq!(record_metrics(&r, &p), record_metrics(&r, &p));
}
