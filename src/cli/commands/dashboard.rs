use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{Dashboard, DashboardLogic};
use crate::errors::{AppError, AppResult};
use crate::models::filter::PeriodFilter;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{CYAN, RESET, color_for_overtime};
use crate::utils::date;
use crate::utils::formatting::{bold, percent};
use crate::utils::table::Table;
use crate::utils::time::format_duration;

fn parse_day(s: &str) -> AppResult<chrono::NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn print_dashboard(d: &Dashboard, sep: char) {
    header(format!("📊 Dashboard: {}", d.filter.describe()), sep);

    if let Some(t) = &d.today {
        let state = if t.open { " (running)" } else { "" };
        println!(
            "Today: {CYAN}{}{RESET}{state}\n",
            format_duration(t.worked_minutes)
        );
    }

    let s = &d.summary;
    println!("{:<20} {}", "Days worked:", s.days_worked);
    println!("{:<20} {}", "Days with overtime:", s.days_with_overtime);
    println!("{:<20} {}", "Total worked:", bold(&format_duration(s.total_minutes)));
    println!(
        "{:<20} {}{}{RESET} ({})",
        "Total overtime:",
        color_for_overtime(s.overtime_minutes),
        format_duration(s.overtime_minutes),
        percent(s.overtime_percentage)
    );
    println!(
        "{:<20} {}",
        "Average per day:",
        format_duration(s.average_minutes_per_day)
    );

    if d.weeks.is_empty() {
        return;
    }

    println!();
    let mut weeks = Table::new(vec!["Week", "Days", "Worked", "Overtime", "Avg/day"])
        .with_separator(sep);
    for w in &d.weeks {
        weeks.add_row(vec![
            w.week_key.clone(),
            w.days_worked.to_string(),
            format_duration(w.total_minutes),
            format_duration(w.overtime_minutes),
            format_duration(w.average_minutes_per_day),
        ]);
    }
    print!("{}", weeks.render());

    println!();
    let mut days = Table::new(vec!["Weekday", "Days", "Worked"]).with_separator(sep);
    for wd in &d.weekdays {
        days.add_row(vec![
            wd.weekday.to_string(),
            wd.days.to_string(),
            format_duration(wd.worked_minutes),
        ]);
    }
    print!("{}", days.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        last,
        month,
        from,
        to,
        all,
        save,
    } = cmd
    {
        let mut store = open_store(cfg)?;

        let filter = match (last, from, to) {
            (Some(n), _, _) => PeriodFilter::LastDays { days: *n },
            (None, Some(f), Some(t)) => PeriodFilter::range(parse_day(f)?, parse_day(t)?)?,
            _ if *month => PeriodFilter::CurrentMonth,
            _ if *all => PeriodFilter::All,
            _ => store.load_filter()?.unwrap_or_default(),
        };

        if *save {
            store.save_filter(&filter)?;
            success(format!("Dashboard filter saved: {}", filter.describe()));
        }

        let records = store.load()?;
        let policy = store.load_policy()?;
        let dashboard =
            DashboardLogic::build(&records, &policy, &filter, date::today(), date::now_time());

        if records.is_empty() {
            info("No records yet.");
        }
        print_dashboard(&dashboard, cfg.separator());
    }

    Ok(())
}
