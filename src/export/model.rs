use crate::core::calculator::overtime::record_metrics;
use crate::models::day_metrics::DayMetrics;
use crate::models::day_record::DayRecord;
use crate::models::policy::Policy;
use crate::utils::date::{format_br, weekday_short};
use crate::utils::time::{format_duration, format_optional_time};
use serde::Serialize;

/// One exported line per day record.
///
/// Incomplete days carry `-` for both times and `0h 00min` for both
/// durations.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: String,
    #[serde(rename = "Entry")]
    pub entry: String,
    #[serde(rename = "Exit")]
    pub exit: String,
    #[serde(rename = "TotalWorked")]
    pub total_worked: String,
    #[serde(rename = "Overtime")]
    pub overtime: String,
}

/// Sums over the complete days of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportTotals {
    pub days: usize,
    pub worked_minutes: i64,
    pub overtime_minutes: i64,
}

pub(crate) const HEADERS: [&str; 6] = [
    "Date",
    "DayOfWeek",
    "Entry",
    "Exit",
    "TotalWorked",
    "Overtime",
];

pub fn build_rows<'a, I>(records: I, policy: &Policy) -> (Vec<ExportRow>, ExportTotals)
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let mut totals = ExportTotals::default();

    let rows = records
        .into_iter()
        .map(|r| {
            let (entry, exit, worked, overtime) = match record_metrics(r, policy) {
                DayMetrics::Complete {
                    worked_minutes,
                    overtime_minutes,
                    ..
                } => {
                    totals.days += 1;
                    totals.worked_minutes += worked_minutes;
                    totals.overtime_minutes += overtime_minutes;
                    (
                        format_optional_time(r.entry),
                        format_optional_time(r.exit),
                        worked_minutes,
                        overtime_minutes,
                    )
                }
                DayMetrics::Incomplete { .. } => ("-".to_string(), "-".to_string(), 0, 0),
            };

            ExportRow {
                date: format_br(r.date),
                day_of_week: weekday_short(r.date).to_string(),
                entry,
                exit,
                total_worked: format_duration(worked),
                overtime: format_duration(overtime),
            }
        })
        .collect();

    (rows, totals)
}

impl ExportRow {
    pub(crate) fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.day_of_week.clone(),
            self.entry.clone(),
            self.exit.clone(),
            self.total_worked.clone(),
            self.overtime.clone(),
        ]
    }
}
