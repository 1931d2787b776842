// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{HEADERS, RecordExport};
use crate::models::record::AttendanceRecord;

/// CSV with the fixed header row. Fields containing commas, quotes or
/// line breaks are quoted by the writer.
pub(crate) fn render_csv(records: &[&AttendanceRecord]) -> AppResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(HEADERS)?;
    for r in records {
        wtr.serialize(RecordExport::from(*r))?;
    }
    wtr.flush()?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// JSON pretty-printed, one object per record with the CSV column names.
pub(crate) fn render_json(records: &[&AttendanceRecord]) -> AppResult<String> {
    let rows: Vec<RecordExport> = records.iter().map(|r| RecordExport::from(*r)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
