//! Formatting utilities used for CLI and export outputs.

use crate::utils::time::format_duration;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Duration with an explicit sign: `+1h 30min`, `-0h 15min`, zero unsigned.
pub fn signed_duration(mins: i64) -> String {
    let sign = if mins > 0 {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, format_duration(mins))
}

/// Percentage with one decimal, as shown on the dashboard.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
