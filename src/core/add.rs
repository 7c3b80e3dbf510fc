use crate::core::import::ImportLogic;
use crate::core::reconcile::ImportSummary;
use crate::errors::AppResult;
use crate::ingest::ParsedBatch;
use crate::models::punch::{Punch, PunchKind, PunchSource};
use crate::store::{Backend, RecordStore};
use chrono::{NaiveDate, NaiveTime};

/// Manual punches: quick actions (with a kind) and bare manual entries.
pub struct AddLogic;

impl AddLogic {
    pub fn apply<B: Backend>(
        store: &mut RecordStore<B>,
        date: NaiveDate,
        time: NaiveTime,
        kind: Option<PunchKind>,
    ) -> AppResult<ImportSummary> {
        let punch = match kind {
            Some(k) => Punch::structured(date, time, k, PunchSource::Manual),
            None => Punch::unstructured(date, time, PunchSource::Manual),
        };

        let batch = ParsedBatch {
            punches: vec![punch],
            skipped: 0,
        };

        let origin = if kind.is_some() { "punch" } else { "add" };
        ImportLogic::apply(store, &batch, origin)
    }
}
