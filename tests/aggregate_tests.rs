mod common;
use common::{d, day, t};
use rpunchlog::core::calculator::aggregate::{
    period_summary, today_status, weekday_distribution, weekly_aggregates,
};
use rpunchlog::core::dashboard::DashboardLogic;
use rpunchlog::models::aggregate::TodayStatus;
use rpunchlog::models::day_record::DayRecord;
use rpunchlog::models::filter::PeriodFilter;
use rpunchlog::models::policy::Policy;

/// Sun 2024-12-29 (ISO 2024-W52), Mon 2024-12-30 and Thu 2025-01-02
/// (both ISO 2025-W01), plus an incomplete Friday.
fn new_year_records() -> Vec<DayRecord> {
    vec![
        day("2024-12-29", Some("09:00"), None, None, Some("13:00")),
        day("2024-12-30", Some("08:00"), None, None, Some("18:18")),
        day("2025-01-02", Some("08:00"), None, None, Some("17:00")),
        day("2025-01-03", Some("08:00"), None, None, None),
    ]
}

#[test]
fn weeks_follow_iso_numbering_across_new_year() {
    let records = new_year_records();
    let weeks = weekly_aggregates(&records, &Policy::default());

    assert_eq!(weeks.len(), 2);

    assert_eq!(weeks[0].week_key, "2024-W52");
    assert_eq!(weeks[0].days_worked, 1);
    assert_eq!(weeks[0].total_minutes, 240);
    assert_eq!(weeks[0].overtime_minutes, 240);

    assert_eq!(weeks[1].week_key, "2025-W01");
    assert_eq!(weeks[1].days_worked, 2);
    assert_eq!(weeks[1].total_minutes, 1158);
    assert_eq!(weeks[1].overtime_minutes, 102);
    assert_eq!(weeks[1].average_minutes_per_day, 579);
}

#[test]
fn weekly_cap_bounds_each_week() {
    let policy = Policy {
        weekly_overtime_cap_minutes: Some(100),
        ..Policy::default()
    };
    let records = new_year_records();
    let weeks = weekly_aggregates(&records, &policy);

    assert_eq!(weeks[0].overtime_minutes, 100);
    assert_eq!(weeks[1].overtime_minutes, 100);
}

#[test]
fn week_of_incomplete_days_only_is_omitted() {
    let records = vec![day("2025-03-12", Some("08:00"), None, None, None)];
    assert!(weekly_aggregates(&records, &Policy::default()).is_empty());
}

#[test]
fn period_summary_counts_complete_days_only() {
    let records = new_year_records();
    let s = period_summary(&records, &Policy::default());

    assert_eq!(s.days_worked, 3);
    assert_eq!(s.days_with_overtime, 3);
    assert_eq!(s.total_minutes, 1398);
    assert_eq!(s.overtime_minutes, 342);
    assert_eq!(s.average_minutes_per_day, 466);
    assert_eq!(s.overtime_percentage, 24.5);
}

#[test]
fn empty_period_summary_is_zero() {
    let s = period_summary(&Vec::<DayRecord>::new(), &Policy::default());
    assert_eq!(s.days_worked, 0);
    assert_eq!(s.average_minutes_per_day, 0);
    assert_eq!(s.overtime_percentage, 0.0);
}

#[test]
fn weekday_distribution_has_seven_entries_monday_first() {
    let records = new_year_records();
    let dist = weekday_distribution(&records, &Policy::default());

    assert_eq!(dist.len(), 7);
    assert_eq!(dist[0].weekday, "Mon");
    assert_eq!(dist[0].worked_minutes, 618);
    assert_eq!(dist[3].weekday, "Thu");
    assert_eq!(dist[3].worked_minutes, 540);
    assert_eq!(dist[4].days, 0);
    assert_eq!(dist[6].weekday, "Sun");
    assert_eq!(dist[6].worked_minutes, 240);
}

#[test]
fn today_status_runs_until_now_without_exit() {
    let open = day("2025-03-12", Some("08:00"), None, None, None);
    assert_eq!(
        today_status(&open, t("10:30"), &Policy::default()),
        Some(TodayStatus {
            worked_minutes: 150,
            open: true
        })
    );

    let with_lunch = day("2025-03-12", Some("08:00"), Some("12:00"), Some("13:00"), None);
    assert_eq!(
        today_status(&with_lunch, t("15:00"), &Policy::default()).map(|s| s.worked_minutes),
        Some(360)
    );
}

#[test]
fn today_status_closed_day_and_no_entry() {
    let closed = day("2025-03-12", Some("08:00"), None, None, Some("17:00"));
    assert_eq!(
        today_status(&closed, t("20:00"), &Policy::default()),
        Some(TodayStatus {
            worked_minutes: 540,
            open: false
        })
    );

    let no_entry = day("2025-03-12", None, Some("12:00"), None, None);
    assert_eq!(today_status(&no_entry, t("20:00"), &Policy::default()), None);
}

#[test]
fn period_filters() {
    let today = d("2025-03-12");
    let records = vec![
        day("2025-02-28", Some("08:00"), None, None, Some("17:00")),
        day("2025-03-04", Some("08:00"), None, None, Some("17:00")),
        day("2025-03-05", Some("08:00"), None, None, Some("17:00")),
        day("2025-03-12", Some("08:00"), None, None, Some("17:00")),
    ];

    assert_eq!(PeriodFilter::All.apply(&records, today).len(), 4);
    assert_eq!(
        PeriodFilter::LastDays { days: 7 }
            .apply(&records, today)
            .len(),
        2
    );
    assert_eq!(PeriodFilter::CurrentMonth.apply(&records, today).len(), 3);

    let range = PeriodFilter::from_expr("2025-02-01:2025-03-04").expect("range");
    assert_eq!(range.apply(&records, today).len(), 2);
}

#[test]
fn filter_expressions() {
    assert_eq!(PeriodFilter::from_expr("all").ok(), Some(PeriodFilter::All));
    assert_eq!(
        PeriodFilter::from_expr("last:30").ok(),
        Some(PeriodFilter::LastDays { days: 30 })
    );
    assert_eq!(
        PeriodFilter::from_expr("2025-02").ok(),
        Some(PeriodFilter::Range {
            start: d("2025-02-01"),
            end: d("2025-02-28")
        })
    );
    assert!(PeriodFilter::from_expr("2025-03:2025-01").is_err());
    assert!(PeriodFilter::range(d("2025-03-02"), d("2025-03-01")).is_err());
    assert!(PeriodFilter::from_expr("last:x").is_err());
}

#[test]
fn dashboard_today_card_ignores_the_filter() {
    let today = d("2025-03-12");
    let records = vec![
        day("2025-01-10", Some("08:00"), None, None, Some("17:00")),
        day("2025-03-12", Some("08:00"), None, None, None),
    ];
    let filter = PeriodFilter::range(d("2025-01-01"), d("2025-01-31")).expect("range");

    let dash = DashboardLogic::build(&records, &Policy::default(), &filter, today, t("09:00"));

    assert_eq!(dash.summary.days_worked, 1);
    assert_eq!(dash.weeks.len(), 1);
    assert_eq!(dash.weekdays.len(), 7);
    assert_eq!(
        dash.today,
        Some(TodayStatus {
            worked_minutes: 60,
            open: true
        })
    );
}
