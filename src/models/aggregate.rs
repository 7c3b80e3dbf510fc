use serde::Serialize;

/// Roll-up of the complete days of one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekAggregate {
    /// `YYYY-Www`, ISO week-numbering year.
    pub week_key: String,
    pub days_worked: i64,
    pub total_minutes: i64,
    pub overtime_minutes: i64,
    pub average_minutes_per_day: i64,
}

/// Dashboard KPIs for a filtered set of days.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PeriodSummary {
    pub days_worked: i64,
    pub days_with_overtime: i64,
    pub total_minutes: i64,
    pub overtime_minutes: i64,
    pub average_minutes_per_day: i64,
    /// Overtime as a share of total worked time, 0 when nothing was worked.
    pub overtime_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayTotal {
    pub weekday: &'static str,
    pub days: i64,
    pub worked_minutes: i64,
}

/// The "today" card: time worked so far, with the span still open when the
/// exit punch is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayStatus {
    pub worked_minutes: i64,
    pub open: bool,
}
