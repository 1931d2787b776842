//! Record store: the only durable owner of attendance records and of the
//! check-in gate.
//!
//! Both live as JSON documents under two keys of a [`KvBackend`]. Every
//! write reads the whole collection, changes it in memory and writes it back,
//! which is correct under the single-writer model the tool runs with.

use crate::db::kv::KvBackend;
use crate::errors::{AppError, AppResult};
use crate::models::checkin_config::CheckinConfig;
use crate::models::record::AttendanceRecord;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

pub const RECORDS_KEY: &str = "checkin_records_v1";
pub const CONFIG_KEY: &str = "checkin_config_v1";

pub struct RecordStore<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Strict read of the collection: a corrupted value is an error.
    fn load_records(&self) -> AppResult<Vec<AttendanceRecord>> {
        match self.backend.get(RECORDS_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|_| AppError::CorruptStore(RECORDS_KEY.to_string())),
        }
    }

    fn write_records(&mut self, records: &[AttendanceRecord]) -> AppResult<()> {
        let json = serde_json::to_string(records)?;
        self.backend.set(RECORDS_KEY, &json)
    }

    /// All records in insertion order. Re-reads the backend on every call;
    /// unreadable storage yields an empty list.
    pub fn list_records(&self) -> Vec<AttendanceRecord> {
        match self.load_records() {
            Ok(records) => records,
            Err(e) => {
                warning(format!("Reading attendance records failed: {}", e));
                Vec::new()
            }
        }
    }

    /// Append one record. No uniqueness check at this level.
    pub fn save_record(&mut self, record: &AttendanceRecord) -> AppResult<()> {
        let mut records = self.load_records()?;
        records.push(record.clone());
        self.write_records(&records)
    }

    /// Remove the record with the given id; absent ids are a no-op.
    pub fn delete_record(&mut self, id: &str) -> AppResult<()> {
        let records = self.load_records()?;
        let before = records.len();
        let kept: Vec<AttendanceRecord> = records.into_iter().filter(|r| r.id != id).collect();

        if kept.len() == before {
            return Ok(());
        }

        self.write_records(&kept)
    }

    /// Persisted gate, or the system default when none was saved yet.
    /// The default is not written back.
    pub fn get_config(&self) -> CheckinConfig {
        let stored = match self.backend.get(CONFIG_KEY) {
            Ok(v) => v,
            Err(e) => {
                warning(format!("Reading check-in config failed: {}", e));
                None
            }
        };

        stored
            .and_then(|raw| match serde_json::from_str::<CheckinConfig>(&raw) {
                Ok(cfg) => Some(cfg),
                Err(_) => {
                    warning("Stored check-in config is corrupted, using defaults.");
                    None
                }
            })
            .unwrap_or_else(|| CheckinConfig::system_default(date::now()))
    }

    pub fn save_config(&mut self, config: &CheckinConfig) -> AppResult<()> {
        let json = serde_json::to_string(config)?;
        self.backend.set(CONFIG_KEY, &json)
    }

    /// First record registered for `enrollment_id` on `today`, if any.
    pub fn find_todays_record(
        &self,
        enrollment_id: &str,
        today: NaiveDate,
    ) -> Option<AttendanceRecord> {
        let wanted = enrollment_id.trim();
        self.list_records()
            .into_iter()
            .find(|r| r.enrollment_id == wanted && r.is_on(today))
    }
}
