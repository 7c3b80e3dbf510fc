use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::policy::Policy;
use crate::ui::messages::{header, success};
use crate::utils::formatting::bold;
use crate::utils::time::{format_duration, parse_duration_minutes};

fn print_policy(policy: &Policy, sep: char) {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let cap = |c: Option<i64>| c.map(format_duration).unwrap_or_else(|| "none".to_string());

    header("Overtime policy", sep);
    println!(
        "{:<24} {}",
        "Weekday threshold:",
        bold(&format_duration(policy.weekday_threshold_minutes))
    );
    println!(
        "{:<24} {}",
        "Weekend full overtime:",
        yes_no(policy.weekend_is_full_overtime)
    );
    println!(
        "{:<24} {}",
        "Lunch deduction:",
        yes_no(policy.lunch_deduction_enabled)
    );
    println!("{:<24} {}", "Daily overtime cap:", cap(policy.daily_overtime_cap_minutes));
    println!("{:<24} {}", "Weekly overtime cap:", cap(policy.weekly_overtime_cap_minutes));
}

/// Show the active policy, applying any requested change first.
/// An invalid change is rejected and the stored policy stays in force.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Policy {
        threshold,
        weekend_full_overtime,
        lunch_deduction,
        daily_cap,
        weekly_cap,
        no_daily_cap,
        no_weekly_cap,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let current = store.load_policy()?;
        let mut policy = current.clone();

        if let Some(t) = threshold {
            policy.weekday_threshold_minutes = parse_duration_minutes(t)?;
        }
        if let Some(b) = weekend_full_overtime {
            policy.weekend_is_full_overtime = *b;
        }
        if let Some(b) = lunch_deduction {
            policy.lunch_deduction_enabled = *b;
        }
        if let Some(c) = daily_cap {
            policy.daily_overtime_cap_minutes = Some(parse_duration_minutes(c)?);
        }
        if *no_daily_cap {
            policy.daily_overtime_cap_minutes = None;
        }
        if let Some(c) = weekly_cap {
            policy.weekly_overtime_cap_minutes = Some(parse_duration_minutes(c)?);
        }
        if *no_weekly_cap {
            policy.weekly_overtime_cap_minutes = None;
        }

        if policy != current {
            store.save_policy(&policy)?;
            store.audit("policy", "", &format!("{policy:?}"));
            success("Policy updated");
        }

        print_policy(&policy, cfg.separator());
    }

    Ok(())
}
