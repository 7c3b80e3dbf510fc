use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Overtime policy. Loaded from the record store and passed explicitly to
/// every metrics computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Weekday minutes before overtime starts (8h48 by default).
    #[serde(default = "default_threshold")]
    pub weekday_threshold_minutes: i64,

    /// Saturday and Sunday count entirely as overtime.
    #[serde(default = "default_true")]
    pub weekend_is_full_overtime: bool,

    #[serde(default = "default_true")]
    pub lunch_deduction_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_overtime_cap_minutes: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_overtime_cap_minutes: Option<i64>,
}

pub const DEFAULT_WEEKDAY_THRESHOLD: i64 = 528;
const MINUTES_PER_DAY: i64 = 24 * 60;

fn default_threshold() -> i64 {
    DEFAULT_WEEKDAY_THRESHOLD
}

fn default_true() -> bool {
    true
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            weekday_threshold_minutes: default_threshold(),
            weekend_is_full_overtime: true,
            lunch_deduction_enabled: true,
            daily_overtime_cap_minutes: None,
            weekly_overtime_cap_minutes: None,
        }
    }
}

impl Policy {
    /// Reject values that cannot describe a working day.
    pub fn validate(&self) -> AppResult<()> {
        if !(0..=MINUTES_PER_DAY).contains(&self.weekday_threshold_minutes) {
            return Err(AppError::Policy(format!(
                "weekday threshold must be between 0 and {MINUTES_PER_DAY} minutes, got {}",
                self.weekday_threshold_minutes
            )));
        }

        if let Some(cap) = self.daily_overtime_cap_minutes
            && !(0..=MINUTES_PER_DAY).contains(&cap)
        {
            return Err(AppError::Policy(format!(
                "daily overtime cap must be between 0 and {MINUTES_PER_DAY} minutes, got {cap}"
            )));
        }

        if let Some(cap) = self.weekly_overtime_cap_minutes
            && cap < 0
        {
            return Err(AppError::Policy(format!(
                "weekly overtime cap cannot be negative, got {cap}"
            )));
        }

        Ok(())
    }
}
