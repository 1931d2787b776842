use crate::cli::commands::{build_query, clock, open_panel, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::view::SortMode;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::checkin_config::CheckinConfig;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREEN, RED, RESET};
use crate::utils::date::br_datetime;

fn print_gate(cfg: &CheckinConfig) {
    let color = if cfg.enabled { GREEN } else { RED };
    info(format!(
        "Check-in {}{}{} | Atualizado em: {} ({})",
        color,
        cfg.status_label(),
        RESET,
        br_datetime(&cfg.updated_at),
        cfg.updated_by
    ));
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Gate { enable, disable } = &cli.command {
        let mut store = open_store(cfg)?;
        let now = clock(cli)?;
        let query = build_query(&None, &None, SortMode::default(), now)?;
        let mut panel = open_panel(cli, cfg, &mut store, query)?;

        let wanted = match (*enable, *disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        if let Some(enabled) = wanted {
            panel.toggle_gate(enabled, now)?;
            ttlog_quiet(
                panel.store().backend().conn(),
                "gate",
                if enabled { "enabled" } else { "disabled" },
                "Check-in gate changed by professor",
            );
            success(if enabled {
                "Check-in habilitado."
            } else {
                "Check-in desabilitado."
            });
        }

        print_gate(panel.config());
    }

    Ok(())
}
