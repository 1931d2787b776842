use super::{client::ClientMetadata, status::RecordStatus};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One student's registered presence.
///
/// Field names on disk follow the layout used by the browser version of the
/// tool, so an exported `checkin_records_v1` value can be loaded as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    #[serde(rename = "nome_completo")]
    pub full_name: String,
    #[serde(rename = "matricula")]
    pub enrollment_id: String,
    pub timestamp: DateTime<FixedOffset>,
    #[serde(rename = "data")]
    pub date_key: String, // YYYY-MM-DD
    #[serde(rename = "hora")]
    pub time_label: String, // HH:MM
    #[serde(flatten)]
    pub client: ClientMetadata,
    #[serde(default)]
    pub status: RecordStatus,
}

impl AttendanceRecord {
    /// Build a fresh record for the given (already validated) input.
    /// - new UUID v4 identifier
    /// - `date_key` / `time_label` derived from `timestamp`
    /// - status is always `registrado`
    pub fn new(
        full_name: &str,
        enrollment_id: &str,
        timestamp: DateTime<FixedOffset>,
        client: ClientMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.to_string(),
            enrollment_id: enrollment_id.to_string(),
            timestamp,
            date_key: date_key_of(&timestamp),
            time_label: time_label_of(&timestamp),
            client,
            status: RecordStatus::Registered,
        }
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date_key == date.format("%Y-%m-%d").to_string()
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// `dd/mm/yyyy` rendering of the record date, as shown to users.
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(&self.date_key, "%Y-%m-%d")
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| self.date_key.clone())
    }
}

pub fn date_key_of(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn time_label_of(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%H:%M").to_string()
}
