use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportRow, ExportTotals, HEADERS};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfManager, Report};
use crate::ui::messages::info;
use crate::utils::time::format_duration;
use std::path::Path;

pub(crate) fn export_pdf(
    rows: &[ExportRow],
    totals: &ExportTotals,
    path: &Path,
    period: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let table: Vec<Vec<String>> = rows.iter().map(ExportRow::cells).collect();
    let footer = vec![
        format!("Days worked: {}", totals.days),
        format!("Total worked: {}", format_duration(totals.worked_minutes)),
        format!("Total overtime: {}", format_duration(totals.overtime_minutes)),
    ];
    let subtitle = format!("Period: {period}");

    let mut pdf = PdfManager::new();
    pdf.write_report(&Report {
        title: "Time report",
        subtitle: &subtitle,
        headers: &HEADERS,
        rows: &table,
        footer: &footer,
    });

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
