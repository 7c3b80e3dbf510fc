//! Record store adapter.
//!
//! The engine reads and writes through [`RecordStore`], which keeps JSON
//! values under namespaced keys of a [`Backend`]:
//!
//! - `cp_registros`       → array of day records (and legacy raw entries)
//! - `cp_configuracoes`   → overtime policy
//! - `cp_dashboardFiltro` → last dashboard filter
//!
//! Every mutating call performs exactly one backend write, so a rejected
//! write leaves the previous state intact.

pub mod memory;
pub mod sqlite;

use crate::core::reconcile::reconcile;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::{DayRecord, parse_stored_time};
use crate::models::filter::PeriodFilter;
use crate::models::policy::Policy;
use crate::models::punch::{Punch, PunchSource};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const KEY_PREFIX: &str = "cp_";
pub const RECORDS_KEY: &str = "registros";
pub const POLICY_KEY: &str = "configuracoes";
pub const FILTER_KEY: &str = "dashboardFiltro";

/// Key/value capability the store is built on.
pub trait Backend {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Append one row to the internal operation log.
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

/// One element of the persisted records array.
///
/// Older data also holds bare `{ "data": .., "hora": .. }` punches; those are
/// folded into day records on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Raw(RawPunch),
    Record(DayRecord),
}

/// Legacy bare punch. Strict, so a day record carrying a stray `hora` is not
/// read as one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPunch {
    pub data: NaiveDate,
    pub hora: String,
}

impl From<DayRecord> for StoredEntry {
    fn from(r: DayRecord) -> Self {
        StoredEntry::Record(r)
    }
}

pub struct RecordStore<B: Backend> {
    backend: B,
}

fn namespaced(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

/// Fold stored entries into one record per date, sorted, empty ones dropped.
fn normalize(entries: Vec<StoredEntry>) -> AppResult<Vec<DayRecord>> {
    let mut records = Vec::new();
    let mut raw = Vec::new();

    for entry in entries {
        match entry {
            StoredEntry::Record(r) => records.push(r),
            StoredEntry::Raw(RawPunch { data, hora }) => {
                let time = parse_stored_time(hora.trim()).ok_or_else(|| {
                    AppError::StoreContract(format!("invalid time '{hora}' stored for {data}"))
                })?;
                raw.push(Punch::unstructured(data, time, PunchSource::Manual));
            }
        }
    }

    Ok(reconcile(records, &raw).records)
}

impl<B: Backend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.backend.get(&namespaced(key))? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                AppError::StoreContract(format!("value under '{key}' is not valid: {e}"))
            }),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.backend.set(&namespaced(key), &json)
    }

    /// Stored entries exactly as persisted.
    pub fn load_entries(&self) -> AppResult<Vec<StoredEntry>> {
        Ok(self.read_json(RECORDS_KEY)?.unwrap_or_default())
    }

    /// Canonical records, one per date, ascending.
    pub fn load(&self) -> AppResult<Vec<DayRecord>> {
        normalize(self.load_entries()?)
    }

    /// Replace the whole record set. Records are written sorted by date;
    /// empty records are dropped. Two records for the same date are rejected.
    pub fn save(&mut self, records: &[DayRecord]) -> AppResult<()> {
        let mut sorted: Vec<&DayRecord> = records.iter().filter(|r| !r.is_empty()).collect();
        sorted.sort_by_key(|r| r.date);

        let mut seen = BTreeSet::new();
        for r in &sorted {
            if !seen.insert(r.date) {
                return Err(AppError::StoreContract(format!(
                    "more than one record for {}",
                    r.date
                )));
            }
        }

        self.write_json(RECORDS_KEY, &sorted)
    }

    /// Equivalent to load → push → save, done in one write.
    pub fn append(&mut self, entry: StoredEntry) -> AppResult<()> {
        let mut entries = self.load_entries()?;
        entries.push(entry);
        self.write_json(RECORDS_KEY, &entries)
    }

    pub fn clear(&mut self) -> AppResult<()> {
        self.backend.remove(&namespaced(RECORDS_KEY))
    }

    /// Remove the record of one date. Returns whether one existed.
    pub fn remove_day(&mut self, date: NaiveDate) -> AppResult<bool> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.date != date);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }

    /// Stored policy, or the default one when none was saved yet.
    pub fn load_policy(&self) -> AppResult<Policy> {
        Ok(self.read_json(POLICY_KEY)?.unwrap_or_default())
    }

    /// Validate and persist. An invalid policy is rejected and the stored one
    /// stays active.
    pub fn save_policy(&mut self, policy: &Policy) -> AppResult<()> {
        policy.validate()?;
        self.write_json(POLICY_KEY, policy)
    }

    pub fn load_filter(&self) -> AppResult<Option<PeriodFilter>> {
        self.read_json(FILTER_KEY)
    }

    pub fn save_filter(&mut self, filter: &PeriodFilter) -> AppResult<()> {
        self.write_json(FILTER_KEY, filter)
    }

    /// Internal log line. Never fails the calling operation.
    pub fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.backend.audit(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}
