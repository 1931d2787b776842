//! Professor panel: authenticated access to the record collection.
//!
//! The panel keeps a snapshot of the records and a cached copy of the gate.
//! Both are only read models; every change goes through the store first and
//! the cached copy is replaced right after the write.

use crate::core::auth::Credentials;
use crate::core::view::{ViewQuery, build_view};
use crate::db::kv::KvBackend;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::export::{ExportFormat, render};
use crate::models::checkin_config::CheckinConfig;
use crate::models::record::AttendanceRecord;
use chrono::{DateTime, FixedOffset};

pub struct ReviewPanel<'s, B: KvBackend> {
    store: &'s mut RecordStore<B>,
    records: Vec<AttendanceRecord>,
    config: CheckinConfig,
    query: ViewQuery,
}

impl<'s, B: KvBackend> ReviewPanel<'s, B> {
    /// Open the panel if `user` / `password` match the configured pair.
    pub fn login(
        store: &'s mut RecordStore<B>,
        credentials: &Credentials,
        user: &str,
        password: &str,
        query: ViewQuery,
    ) -> AppResult<Self> {
        credentials.verify(user, password)?;

        let records = store.list_records();
        let config = store.get_config();

        Ok(Self {
            store,
            records,
            config,
            query,
        })
    }

    /// Re-read records and gate from the store.
    pub fn refresh(&mut self) {
        self.records = self.store.list_records();
        self.config = self.store.get_config();
    }

    pub fn store(&self) -> &RecordStore<B> {
        &*self.store
    }

    pub fn config(&self) -> &CheckinConfig {
        &self.config
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: ViewQuery) {
        self.query = query;
    }

    /// All records of the current snapshot, unfiltered.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    /// Current filtered/sorted view, recomputed on each call.
    pub fn view(&self) -> Vec<&AttendanceRecord> {
        build_view(&self.records, &self.query)
    }

    /// Open or close check-in. This is the only writer of the gate.
    pub fn toggle_gate(
        &mut self,
        enabled: bool,
        now: DateTime<FixedOffset>,
    ) -> AppResult<&CheckinConfig> {
        let cfg = CheckinConfig::by_professor(enabled, now);
        self.store.save_config(&cfg)?;
        self.config = cfg;
        Ok(&self.config)
    }

    /// Delete a record after `confirm` approved it.
    ///
    /// `confirm` receives the student's name. Returns the removed record,
    /// or `None` when the id is unknown or the deletion was declined.
    pub fn delete_record<F>(
        &mut self,
        id: &str,
        confirm: F,
    ) -> AppResult<Option<AttendanceRecord>>
    where
        F: FnOnce(&str) -> bool,
    {
        let target = match self.records.iter().find(|r| r.id == id) {
            Some(r) => r.clone(),
            None => return Ok(None),
        };

        if !confirm(&target.full_name) {
            return Ok(None);
        }

        self.store.delete_record(id)?;
        self.refresh();

        Ok(Some(target))
    }

    /// Serialize the current view. `None` when there is nothing to export.
    pub fn export_current_view(&self, format: ExportFormat) -> AppResult<Option<String>> {
        let view = self.view();
        if view.is_empty() {
            return Ok(None);
        }
        render(&view, format).map(Some)
    }
}
