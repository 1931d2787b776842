use crate::cli::commands::{build_query, clock, open_panel, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::view::SortMode;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(
            s.trim().to_lowercase().as_str(),
            "y" | "yes" | "s" | "sim"
        )
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = &cli.command {
        let mut store = open_store(cfg)?;
        let now = clock(cli)?;
        let query = build_query(&None, &None, SortMode::default(), now)?;
        let mut panel = open_panel(cli, cfg, &mut store, query)?;

        if !panel.records().iter().any(|r| r.id == *id) {
            warning(format!("No record with id {}: nothing to delete.", id));
            return Ok(());
        }

        let skip_prompt = *yes;
        let removed = panel.delete_record(id, |name| {
            skip_prompt
                || ask_confirmation(&format!(
                    "Tem certeza que deseja apagar o registro de {}?",
                    name
                ))
        })?;

        match removed {
            Some(r) => {
                ttlog_quiet(
                    panel.store().backend().conn(),
                    "del",
                    &r.enrollment_id,
                    &format!("Deleted record {} of {} ({})", r.id, r.full_name, r.date_key),
                );
                success(format!(
                    "Registro de {} ({} {}) apagado. Restam {} registros.",
                    r.full_name,
                    r.display_date(),
                    r.time_label,
                    panel.records().len()
                ));
            }
            None => info("Operation cancelled."),
        }
    }

    Ok(())
}
