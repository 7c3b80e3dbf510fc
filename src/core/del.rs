use crate::errors::{AppError, AppResult};
use crate::store::{Backend, RecordStore};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the record of a single date.
    pub fn remove_day<B: Backend>(store: &mut RecordStore<B>, date: NaiveDate) -> AppResult<()> {
        if !store.remove_day(date)? {
            return Err(AppError::NoRecordForDate(date.to_string()));
        }

        store.audit("del", &date.to_string(), "Record removed");
        Ok(())
    }

    /// Remove every record. Policy and saved filter are kept.
    pub fn clear_all<B: Backend>(store: &mut RecordStore<B>) -> AppResult<usize> {
        let count = store.load()?.len();
        store.clear()?;

        store.audit("clear", "all", &format!("{count} records removed"));
        Ok(count)
    }
}
