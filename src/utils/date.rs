use chrono::{DateTime, FixedOffset, Local};

pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Parse an RFC 3339 instant such as `2024-03-01T09:15:00-03:00`.
pub fn parse_instant(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

/// `dd/mm/yyyy HH:MM`
pub fn br_datetime(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}
