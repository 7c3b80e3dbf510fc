use serde::Serialize;

/// Why a day has no metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompleteReason {
    MissingEntry,
    MissingExit,
    /// Exit earlier than entry (e.g. an overnight shift); never turned into
    /// negative worked time.
    InvertedSpan,
}

impl IncompleteReason {
    pub fn label(&self) -> &'static str {
        match self {
            IncompleteReason::MissingEntry => "no entry",
            IncompleteReason::MissingExit => "no exit",
            IncompleteReason::InvertedSpan => "exit before entry",
        }
    }
}

/// Derived per-day figures. Computed on read, never stored.
///
/// `Incomplete` means "no data" and must not be rendered as zero minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayMetrics {
    Complete {
        worked_minutes: i64,
        overtime_minutes: i64,
        lunch_minutes: i64,
    },
    Incomplete { reason: IncompleteReason },
}

impl DayMetrics {
    pub fn is_complete(&self) -> bool {
        matches!(self, DayMetrics::Complete { .. })
    }

    pub fn worked_minutes(&self) -> Option<i64> {
        match self {
            DayMetrics::Complete { worked_minutes, .. } => Some(*worked_minutes),
            DayMetrics::Incomplete { .. } => None,
        }
    }

    pub fn overtime_minutes(&self) -> Option<i64> {
        match self {
            DayMetrics::Complete {
                overtime_minutes, ..
            } => Some(*overtime_minutes),
            DayMetrics::Incomplete { .. } => None,
        }
    }

    pub fn lunch_minutes(&self) -> Option<i64> {
        match self {
            DayMetrics::Complete { lunch_minutes, .. } => Some(*lunch_minutes),
            DayMetrics::Incomplete { .. } => None,
        }
    }
}
