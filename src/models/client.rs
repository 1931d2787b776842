use serde::{Deserialize, Serialize};

/// Diagnostic strings captured at submission time.
/// Shown in audit views and exports, never parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientMetadata {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub device_hint: String,
}

impl ClientMetadata {
    /// Metadata describing the local terminal session.
    pub fn capture() -> Self {
        Self {
            ip: "127.0.0.1 (local)".to_string(),
            user_agent: format!("rcheckin/{}", env!("CARGO_PKG_VERSION")),
            device_hint: format!("{} / {}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }
}
