use crate::cli::commands::{build_query, clock, open_panel, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::{ExportLogic, default_file_name};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        search,
        sort,
        force,
    } = &cli.command
    {
        let mut store = open_store(cfg)?;
        let now = clock(cli)?;
        let query = build_query(period, search, *sort, now)?;
        let panel = open_panel(cli, cfg, &mut store, query)?;

        let Some(content) = panel.export_current_view(*format)? else {
            warning("Nenhum registro para exportar nos critérios selecionados.");
            return Ok(());
        };

        let path: PathBuf = match file {
            Some(f) => expand_tilde(f),
            None => {
                let dir = cfg
                    .export_dir
                    .as_deref()
                    .map(expand_tilde)
                    .unwrap_or_else(|| PathBuf::from("."));
                dir.join(default_file_name(
                    &panel.query().period,
                    now.date_naive(),
                    *format,
                ))
            }
        };

        let rows = panel.view().len();
        ExportLogic::write(&content, &path, *format, rows, *force)?;

        ttlog_quiet(
            panel.store().backend().conn(),
            "export",
            format.as_str(),
            &format!("{} rows to {}", rows, path.display()),
        );
    }
    Ok(())
}
