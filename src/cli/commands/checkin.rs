use crate::cli::commands::{clock, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::checkin::{CheckinForm, CheckinLogic};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::client::ClientMetadata;
use crate::ui::messages::success;

/// Register one check-in. The gate is read from the store right before
/// submitting, never from an older copy.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { name, enrollment } = &cli.command {
        let mut store = open_store(cfg)?;
        let now = clock(cli)?;

        let enabled = store.get_config().enabled;
        let form = CheckinForm::new(name, enrollment, ClientMetadata::capture());

        let record = CheckinLogic::submit(&mut store, &form, enabled, now)?;

        ttlog_quiet(
            store.backend().conn(),
            "checkin",
            &record.enrollment_id,
            &format!("{} registered at {}", record.full_name, record.time_label),
        );

        success(format!(
            "Presença registrada com sucesso em {} às {}.",
            record.display_date(),
            record.time_label
        ));
    }

    Ok(())
}
