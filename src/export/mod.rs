// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::{HEADERS, RecordExport};

use crate::core::view::PeriodFilter;
use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;
use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!(
        "{label} export completed: {} ({rows} registros)",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Serialize a view of records in the requested format.
pub fn render(records: &[&AttendanceRecord], format: ExportFormat) -> AppResult<String> {
    match format {
        ExportFormat::Csv => json_csv::render_csv(records),
        ExportFormat::Json => json_csv::render_json(records),
    }
}

/// `presencas_export_<mode>_<YYYY-MM-DD>.<ext>`
pub fn default_file_name(period: &PeriodFilter, today: NaiveDate, format: ExportFormat) -> String {
    format!(
        "presencas_export_{}_{}.{}",
        period.mode(),
        today.format("%Y-%m-%d"),
        format.as_str()
    )
}
