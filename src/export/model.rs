// src/export/model.rs

use crate::models::record::AttendanceRecord;
use serde::Serialize;

/// Export column titles, in file order.
pub const HEADERS: [&str; 7] = [
    "Data",
    "Hora",
    "Nome Completo",
    "Matricula",
    "Status",
    "IP",
    "Dispositivo",
];

/// Flat row written to CSV / JSON. Field order is the column order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Hora")]
    pub time: String,
    #[serde(rename = "Nome Completo")]
    pub full_name: String,
    #[serde(rename = "Matricula")]
    pub enrollment_id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "IP")]
    pub ip: String,
    #[serde(rename = "Dispositivo")]
    pub device_hint: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            date: r.date_key.clone(),
            time: r.time_label.clone(),
            full_name: r.full_name.clone(),
            enrollment_id: r.enrollment_id.clone(),
            status: r.status.to_string(),
            ip: r.client.ip.clone(),
            device_hint: r.client.device_hint.clone(),
        }
    }
}
