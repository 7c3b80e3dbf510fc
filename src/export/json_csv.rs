use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportRow, HEADERS};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV with a UTF-8 BOM, `;` separated, header line first.
pub fn write_csv<W: Write>(rows: &[ExportRow], mut out: W) -> AppResult<()> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(out);

    wtr.write_record(HEADERS)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_csv(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(rows, BufWriter::new(file))?;

    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
