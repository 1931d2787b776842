pub mod checkin;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod gate;
pub mod init;
pub mod list;
pub mod log;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::auth::Credentials;
use crate::core::review::ReviewPanel;
use crate::core::view::{PeriodFilter, SortMode, ViewQuery};
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog_quiet;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{DateTime, FixedOffset};

/// Open the configured database as a record store.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteKv>> {
    Ok(RecordStore::new(SqliteKv::open(&cfg.database)?))
}

/// Current instant: `--now` when given, the local clock otherwise.
pub(crate) fn clock(cli: &Cli) -> AppResult<DateTime<FixedOffset>> {
    match &cli.now {
        Some(s) => date::parse_instant(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::now()),
    }
}

/// Build the view query from command flags; no period means today.
pub(crate) fn build_query(
    period: &Option<String>,
    search: &Option<String>,
    sort: SortMode,
    now: DateTime<FixedOffset>,
) -> AppResult<ViewQuery> {
    let period = match period {
        Some(p) => PeriodFilter::parse(p)?,
        None => PeriodFilter::today(now.date_naive()),
    };

    Ok(ViewQuery::new(period)
        .with_search(search.as_deref())
        .with_sort(sort))
}

/// Authenticate with `--user` / `--password` and open the professor panel.
/// Failed attempts are written to the internal log.
pub(crate) fn open_panel<'s>(
    cli: &Cli,
    cfg: &Config,
    store: &'s mut RecordStore<SqliteKv>,
    query: ViewQuery,
) -> AppResult<ReviewPanel<'s, SqliteKv>> {
    let user = cli.user.as_deref().unwrap_or_default();
    let password = cli.password.as_deref().unwrap_or_default();
    let credentials = Credentials::from_config(cfg);

    if let Err(e) = credentials.verify(user, password) {
        ttlog_quiet(
            store.backend().conn(),
            "login_failed",
            user,
            "Invalid professor credentials",
        );
        return Err(e);
    }

    ReviewPanel::login(store, &credentials, user, password, query)
}
