use super::punch::PunchKind;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical attendance record for one calendar date.
///
/// JSON shape (one element of the `registros` array):
///
/// ```json
/// { "data": "2025-03-12", "entrada": "08:00", "almoco_saida": "12:00",
///   "almoco_volta": "13:00", "saida": "17:00" }
/// ```
///
/// `explicit` lists the fields written by structured punches and `batidas`
/// every bare punch time seen for the date; both are omitted when empty.
/// No ordering is enforced between the four times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(rename = "data")]
    pub date: NaiveDate,

    #[serde(rename = "entrada", default, with = "hhmm")]
    pub entry: Option<NaiveTime>,

    #[serde(rename = "almoco_saida", default, with = "hhmm")]
    pub lunch_out: Option<NaiveTime>,

    #[serde(rename = "almoco_volta", default, with = "hhmm")]
    pub lunch_in: Option<NaiveTime>,

    #[serde(rename = "saida", default, with = "hhmm")]
    pub exit: Option<NaiveTime>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub explicit: BTreeSet<PunchKind>,

    #[serde(
        rename = "batidas",
        default,
        skip_serializing_if = "BTreeSet::is_empty",
        with = "hhmm_set"
    )]
    pub punches: BTreeSet<NaiveTime>,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entry: None,
            lunch_out: None,
            lunch_in: None,
            exit: None,
            explicit: BTreeSet::new(),
            punches: BTreeSet::new(),
        }
    }

    /// Convenience constructor for a plain entry/exit day.
    pub fn with_span(date: NaiveDate, entry: Option<NaiveTime>, exit: Option<NaiveTime>) -> Self {
        Self {
            entry,
            exit,
            ..Self::new(date)
        }
    }

    pub fn get(&self, kind: PunchKind) -> Option<NaiveTime> {
        match kind {
            PunchKind::Entry => self.entry,
            PunchKind::LunchOut => self.lunch_out,
            PunchKind::LunchIn => self.lunch_in,
            PunchKind::Exit => self.exit,
        }
    }

    pub fn set(&mut self, kind: PunchKind, time: NaiveTime) {
        let slot = match kind {
            PunchKind::Entry => &mut self.entry,
            PunchKind::LunchOut => &mut self.lunch_out,
            PunchKind::LunchIn => &mut self.lunch_in,
            PunchKind::Exit => &mut self.exit,
        };
        *slot = Some(time);
    }

    pub fn is_explicit(&self, kind: PunchKind) -> bool {
        self.explicit.contains(&kind)
    }

    /// A record whose four fields are all null carries no information and is
    /// treated as absent.
    pub fn is_empty(&self) -> bool {
        PunchKind::ALL.iter().all(|k| self.get(*k).is_none())
    }

    /// Entry and exit both present.
    pub fn is_complete(&self) -> bool {
        self.entry.is_some() && self.exit.is_some()
    }

    /// True when `time` was already recorded for this date, either as a bare
    /// punch or as one of the four field values.
    pub fn has_time(&self, time: NaiveTime) -> bool {
        self.punches.contains(&time) || PunchKind::ALL.iter().any(|k| self.get(*k) == Some(time))
    }

    /// Merge another record for the same date into this one: null fields are
    /// filled from `other`, provenance sets are united.
    pub fn absorb(&mut self, other: &DayRecord) {
        for kind in PunchKind::ALL {
            if self.get(kind).is_none()
                && let Some(t) = other.get(kind)
            {
                self.set(kind, t);
                if other.is_explicit(kind) {
                    self.explicit.insert(kind);
                }
            }
        }
        self.punches.extend(other.punches.iter().copied());
    }
}

/// `Option<NaiveTime>` as `"HH:MM"` / `null`. Reading also accepts `HH:MM:SS`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_stored_time(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{s}'"))),
        }
    }
}

mod hhmm_set {
    use chrono::NaiveTime;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeSet;

    pub fn serialize<S: Serializer>(set: &BTreeSet<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        let mut seq = s.serialize_seq(Some(set.len()))?;
        for t in set {
            seq.serialize_element(&t.format("%H:%M").to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<NaiveTime>, D::Error> {
        let raw: Vec<String> = Vec::deserialize(d)?;
        raw.iter()
            .map(|s| {
                super::parse_stored_time(s)
                    .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{s}'")))
            })
            .collect()
    }
}

pub(crate) fn parse_stored_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
        .map(crate::utils::time::truncate_to_minute)
}
