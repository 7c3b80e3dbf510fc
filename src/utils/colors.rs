/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Overtime color:
/// \>0 → green
/// 0 → reset
pub fn color_for_overtime(value: i64) -> &'static str {
    if value > 0 { GREEN } else { RESET }
}

/// Grey out placeholders ("-", "0h 00min") so real values stand out.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "0h 00min" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Weekend dates are highlighted in the records table.
pub fn colorize_weekday(label: &str, weekend: bool) -> String {
    if weekend {
        format!("{MAGENTA}{label}{RESET}")
    } else {
        label.to_string()
    }
}
