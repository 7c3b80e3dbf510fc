use crate::core::reconcile::{ImportSummary, Reconciliation, reconcile};
use crate::errors::AppResult;
use crate::ingest::ParsedBatch;
use crate::store::{Backend, RecordStore};

/// Reconcile a parsed batch into the store.
pub struct ImportLogic;

impl ImportLogic {
    /// Load, reconcile in memory, then save once.
    ///
    /// When the save is rejected the error is returned and nothing from the
    /// batch is kept, so the same batch can simply be retried. Nothing is
    /// written when the batch brings no change.
    pub fn apply<B: Backend>(
        store: &mut RecordStore<B>,
        batch: &ParsedBatch,
        origin: &str,
    ) -> AppResult<ImportSummary> {
        let existing = store.load()?;

        let Reconciliation {
            records,
            mut summary,
        } = reconcile(existing, &batch.punches);
        summary.skipped = batch.skipped;

        if summary.changed() {
            store.save(&records)?;
        }

        store.audit(
            origin,
            &format!("{} punches", batch.punches.len()),
            &format!(
                "applied={} duplicates={} conflicts={} skipped={}",
                summary.applied, summary.duplicates, summary.conflicts, summary.skipped
            ),
        );

        Ok(summary)
    }
}
