// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// High-level export logic: write a rendered view to disk.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `content` to `path`.
    ///
    /// - parent directories are created when missing
    /// - an existing file is replaced only with `force` or an explicit yes
    pub fn write(
        content: &str,
        path: &Path,
        format: ExportFormat,
        rows: usize,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        fs::write(path, content)?;

        notify_export_success(&format.as_str().to_uppercase(), path, rows);
        Ok(())
    }
}
