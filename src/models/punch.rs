use crate::utils::time::truncate_to_minute;
use chrono::{NaiveDate, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which of the four daily fields a structured punch fills.
///
/// Serialized with the persisted field names so that a record's `explicit`
/// set reads the same as its keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum PunchKind {
    #[serde(rename = "entrada")]
    #[value(alias = "in")]
    Entry,
    #[serde(rename = "almoco_saida")]
    LunchOut,
    #[serde(rename = "almoco_volta")]
    LunchIn,
    #[serde(rename = "saida")]
    #[value(alias = "out")]
    Exit,
}

impl PunchKind {
    pub const ALL: [PunchKind; 4] = [
        PunchKind::Entry,
        PunchKind::LunchOut,
        PunchKind::LunchIn,
        PunchKind::Exit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::Entry => "entry",
            PunchKind::LunchOut => "lunch-out",
            PunchKind::LunchIn => "lunch-in",
            PunchKind::Exit => "exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchSource {
    Manual,
    Csv,
    Api,
}

/// One raw clock observation, resolved once at ingestion.
///
/// `Structured` punches name the field they fill (manual quick actions);
/// `Unstructured` ones are bare timestamps whose role (entry or exit) is
/// inferred from the other punches of the same date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Punch {
    Structured {
        date: NaiveDate,
        time: NaiveTime,
        kind: PunchKind,
        source: PunchSource,
    },
    Unstructured {
        date: NaiveDate,
        time: NaiveTime,
        source: PunchSource,
    },
}

impl Punch {
    pub fn structured(date: NaiveDate, time: NaiveTime, kind: PunchKind, source: PunchSource) -> Self {
        Punch::Structured {
            date,
            time: truncate_to_minute(time),
            kind,
            source,
        }
    }

    pub fn unstructured(date: NaiveDate, time: NaiveTime, source: PunchSource) -> Self {
        Punch::Unstructured {
            date,
            time: truncate_to_minute(time),
            source,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Punch::Structured { date, .. } | Punch::Unstructured { date, .. } => *date,
        }
    }

    pub fn time(&self) -> NaiveTime {
        match self {
            Punch::Structured { time, .. } | Punch::Unstructured { time, .. } => *time,
        }
    }

    pub fn source(&self) -> PunchSource {
        match self {
            Punch::Structured { source, .. } | Punch::Unstructured { source, .. } => *source,
        }
    }

    pub fn kind(&self) -> Option<PunchKind> {
        match self {
            Punch::Structured { kind, .. } => Some(*kind),
            Punch::Unstructured { .. } => None,
        }
    }
}
