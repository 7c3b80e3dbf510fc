use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::period_summary;
use crate::core::calculator::overtime::record_metrics;
use crate::errors::AppResult;
use crate::models::day_metrics::{DayMetrics, IncompleteReason};
use crate::models::day_record::DayRecord;
use crate::models::filter::PeriodFilter;
use crate::models::policy::Policy;
use crate::ui::messages::{header, info};
use crate::utils::colors::{
    RED, RESET, YELLOW, color_for_overtime, colorize_optional, colorize_weekday,
};
use crate::utils::date::{self, is_weekend, weekday_short};
use crate::utils::formatting::{bold, signed_duration};
use crate::utils::table::Table;
use crate::utils::time::{format_duration, format_optional_time};

fn incomplete_cell(reason: IncompleteReason) -> String {
    let color = match reason {
        IncompleteReason::InvertedSpan => RED,
        _ => YELLOW,
    };
    format!("{color}{}{RESET}", reason.label())
}

fn record_row(r: &DayRecord, policy: &Policy, show_weekday: bool) -> Vec<String> {
    let mut row = vec![date::format_br(r.date)];
    if show_weekday {
        row.push(colorize_weekday(weekday_short(r.date), is_weekend(r.date)));
    }
    for t in [r.entry, r.lunch_out, r.lunch_in, r.exit] {
        row.push(colorize_optional(&format_optional_time(t)));
    }

    match record_metrics(r, policy) {
        DayMetrics::Complete {
            worked_minutes,
            overtime_minutes,
            lunch_minutes,
        } => {
            row.push(colorize_optional(&format_duration(lunch_minutes)));
            row.push(format_duration(worked_minutes));
            row.push(format!(
                "{}{}{RESET}",
                color_for_overtime(overtime_minutes),
                signed_duration(overtime_minutes)
            ));
        }
        DayMetrics::Incomplete { reason } => {
            row.push(colorize_optional("-"));
            row.push(incomplete_cell(reason));
            row.push(colorize_optional("-"));
        }
    }
    row
}

/// Records table for a period (current month by default) plus totals.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let filter = match period {
            Some(p) => PeriodFilter::from_expr(p)?,
            None => PeriodFilter::CurrentMonth,
        };

        let store = open_store(cfg)?;
        let records = store.load()?;
        let policy = store.load_policy()?;
        let today = date::today();
        let selected = filter.apply(&records, today);

        header(format!("📅 Records: {}", filter.describe()), cfg.separator());

        if selected.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        let mut headers = vec!["Date"];
        if cfg.show_weekday {
            headers.push("Day");
        }
        headers.extend(["Entry", "Lunch out", "Lunch in", "Exit", "Lunch", "Worked", "Overtime"]);

        let mut table = Table::new(headers).with_separator(cfg.separator());
        for r in &selected {
            table.add_row(record_row(r, &policy, cfg.show_weekday));
        }
        print!("{}", table.render());

        let s = period_summary(selected.iter().copied(), &policy);
        println!();
        println!(
            "Complete days: {} | Worked: {} | Overtime: {}",
            s.days_worked,
            bold(&format_duration(s.total_minutes)),
            bold(&format_duration(s.overtime_minutes))
        );
    }

    Ok(())
}
