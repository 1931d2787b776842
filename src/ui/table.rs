//! Table rendering for the professor's record list.

use crate::models::record::AttendanceRecord;
use crate::utils::colors::{GREY, RESET};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Left-align `s` to `width` terminal cells (accents and wide glyphs aware).
fn pad_cell(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: UnicodeWidthStr::width(*h),
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_cell(&col.header, col.width));
            out.push_str("  ");
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 2).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_cell(cell, col.width));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

/// Render the record list shown by `list`.
pub fn records_table(records: &[&AttendanceRecord]) -> String {
    let mut table = Table::new(&["Data", "Hora", "Nome Completo", "Matrícula", "Auditoria", "ID"]);

    for r in records {
        let audit = if r.client.device_hint.trim().is_empty() {
            "--".to_string()
        } else {
            r.client.device_hint.clone()
        };
        table.add_row(vec![
            r.display_date(),
            r.time_label.clone(),
            r.full_name.clone(),
            r.enrollment_id.clone(),
            audit,
            r.id.clone(),
        ]);
    }

    table.render()
}

/// Grey placeholder when a view has no rows.
pub fn empty_view_line() -> String {
    format!(
        "{}Nenhum registro encontrado para os critérios selecionados.{}",
        GREY, RESET
    )
}
