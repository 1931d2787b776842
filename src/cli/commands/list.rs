use crate::cli::commands::{build_query, clock, open_panel, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::table::{empty_view_line, records_table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        search,
        sort,
    } = &cli.command
    {
        let mut store = open_store(cfg)?;
        let now = clock(cli)?;
        let query = build_query(period, search, *sort, now)?;
        let panel = open_panel(cli, cfg, &mut store, query)?;

        let view = panel.view();

        header(format!(
            "Registros ({}) | Check-in {}",
            panel.query().period,
            panel.config().status_label()
        ));

        if view.is_empty() {
            println!("{}", empty_view_line());
        } else {
            print!("{}", records_table(&view));
        }

        println!("\nMostrando {} registros", view.len());
    }
    Ok(())
}
