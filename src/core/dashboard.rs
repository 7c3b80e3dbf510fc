use crate::core::calculator::aggregate::{
    period_summary, today_status, weekday_distribution, weekly_aggregates,
};
use crate::models::aggregate::{PeriodSummary, TodayStatus, WeekAggregate, WeekdayTotal};
use crate::models::day_record::DayRecord;
use crate::models::filter::PeriodFilter;
use crate::models::policy::Policy;
use chrono::{NaiveDate, NaiveTime};

/// Everything the dashboard shows for one filter selection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub filter: PeriodFilter,
    pub summary: PeriodSummary,
    pub weeks: Vec<WeekAggregate>,
    pub weekdays: Vec<WeekdayTotal>,
    pub today: Option<TodayStatus>,
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// `today`/`now` come from the caller; the "today" card ignores the filter.
    pub fn build(
        records: &[DayRecord],
        policy: &Policy,
        filter: &PeriodFilter,
        today: NaiveDate,
        now: NaiveTime,
    ) -> Dashboard {
        let selected = filter.apply(records, today);

        let today_card = records
            .iter()
            .find(|r| r.date == today)
            .and_then(|r| today_status(r, now, policy));

        Dashboard {
            filter: filter.clone(),
            summary: period_summary(selected.iter().copied(), policy),
            weeks: weekly_aggregates(selected.iter().copied(), policy),
            weekdays: weekday_distribution(selected.iter().copied(), policy),
            today: today_card,
        }
    }
}
