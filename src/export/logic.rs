use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_rows;
use crate::export::pdf_export::export_pdf;
use crate::models::filter::PeriodFilter;
use crate::store::{Backend, RecordStore};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the day records matching `range` (`None` or `all` for every
    /// record, otherwise `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `A:B`).
    ///
    /// Returns the number of exported rows; nothing is written when the
    /// selection is empty.
    pub fn export<B: Backend>(
        store: &RecordStore<B>,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<usize> {
        let filter = match range {
            None => PeriodFilter::All,
            Some(r) => PeriodFilter::from_expr(r)?,
        };

        let records = store.load()?;
        let selected = filter.apply(&records, today);

        if selected.is_empty() {
            warning(format!("No records found for {}.", filter.describe()));
            return Ok(0);
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let policy = store.load_policy()?;
        let (rows, totals) = build_rows(selected.iter().copied(), &policy);

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Pdf => export_pdf(&rows, &totals, &path, &filter.describe())?,
        }

        Ok(rows.len())
    }
}
