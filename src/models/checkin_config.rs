use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who performed the last change of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatedBy {
    Professor,
    System,
}

impl fmt::Display for UpdatedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdatedBy::Professor => f.write_str("professor"),
            UpdatedBy::System => f.write_str("system"),
        }
    }
}

/// Singleton gate controlling whether new check-ins are accepted.
/// ⇔ kv key `checkin_config_v1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinConfig {
    #[serde(rename = "checkin_enabled")]
    pub enabled: bool,
    pub updated_at: DateTime<FixedOffset>,
    pub updated_by: UpdatedBy,
}

impl CheckinConfig {
    /// Value returned when nothing has been persisted yet.
    pub fn system_default(now: DateTime<FixedOffset>) -> Self {
        Self {
            enabled: true,
            updated_at: now,
            updated_by: UpdatedBy::System,
        }
    }

    /// Value written by a professor toggle.
    pub fn by_professor(enabled: bool, now: DateTime<FixedOffset>) -> Self {
        Self {
            enabled,
            updated_at: now,
            updated_by: UpdatedBy::Professor,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            "HABILITADO"
        } else {
            "DESABILITADO"
        }
    }
}
