//! Settings type tree with compiled defaults.

use serde::{Deserialize, Serialize};

/// Default API base URL (local development backend).
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default log level.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Root settings for the Gather client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatherSettings {
    /// Settings schema version.
    pub version: String,
    /// Remote API settings.
    pub api: ApiSettings,
    /// Local storage settings.
    pub storage: StorageSettings,
    /// Minimum log level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for GatherSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            api: ApiSettings::default(),
            storage: StorageSettings::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// Base URL of the event API (serves `/auth` and `/events`).
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Local storage settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSettings {
    /// Directory holding the persisted session file.
    pub data_dir: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        Self {
            data_dir: format!("{home}/.gather"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
