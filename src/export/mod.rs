//! Report export: CSV, JSON and PDF renditions of the day-record rows.

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod pdf;
mod pdf_export;

pub use json_csv::write_csv;
pub use logic::ExportLogic;
pub use model::{ExportRow, ExportTotals, build_rows};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Pdf,
}
