use crate::db::kv::KvBackend;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::client::ClientMetadata;
use crate::models::record::AttendanceRecord;
use crate::utils::text::word_count;
use chrono::{DateTime, FixedOffset};

/// Raw input of the check-in form.
#[derive(Debug, Clone)]
pub struct CheckinForm {
    pub full_name: String,
    pub enrollment_id: String,
    pub client: ClientMetadata,
}

impl CheckinForm {
    pub fn new(full_name: &str, enrollment_id: &str, client: ClientMetadata) -> Self {
        Self {
            full_name: full_name.to_string(),
            enrollment_id: enrollment_id.to_string(),
            client,
        }
    }
}

/// High-level business logic for the `checkin` command.
pub struct CheckinLogic;

impl CheckinLogic {
    /// Validate the form and register one attendance record.
    ///
    /// Checks run in this order and stop at the first failure:
    /// gate, full name (two words at least), enrollment id, one record per
    /// enrollment id per day. Nothing is written unless every check passes.
    pub fn submit<B: KvBackend>(
        store: &mut RecordStore<B>,
        form: &CheckinForm,
        config_enabled: bool,
        now: DateTime<FixedOffset>,
    ) -> AppResult<AttendanceRecord> {
        if !config_enabled {
            return Err(AppError::CheckinDisabled);
        }

        let full_name = form.full_name.trim();
        if word_count(full_name) < 2 {
            return Err(AppError::InvalidName);
        }

        let enrollment_id = form.enrollment_id.trim();
        if enrollment_id.is_empty() {
            return Err(AppError::MissingEnrollmentId);
        }

        if let Some(existing) = store.find_todays_record(enrollment_id, now.date_naive()) {
            return Err(AppError::DuplicateToday(existing.time_label));
        }

        let record = AttendanceRecord::new(full_name, enrollment_id, now, form.client.clone());

        store
            .save_record(&record)
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(record)
    }
}
