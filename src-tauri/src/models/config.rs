use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const ENV_ANALYSIS_DELAY_MS: &str = "NEWSDESK_ANALYSIS_DELAY_MS";
pub const ENV_DATASET: &str = "NEWSDESK_DATASET";
pub const ENV_LOG: &str = "NEWSDESK_LOG";

/// Runtime configuration. Defaults, overridden by environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Artificial delay before an insight report is published (0 disables it).
    pub analysis_delay_ms: u64,
    /// JSON dataset replacing the bundled sample data.
    pub dataset_path: Option<PathBuf>,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            analysis_delay_ms: 1000,
            dataset_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = AppConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(raw) = get(ENV_ANALYSIS_DELAY_MS) {
            config.analysis_delay_ms = raw.parse().map_err(|_| {
                AppError::InvalidConfig(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_ANALYSIS_DELAY_MS, raw
                ))
            })?;
        }
        if let Some(path) = get(ENV_DATASET) {
            config.dataset_path = Some(PathBuf::from(path));
        }
        if let Some(level) = get(ENV_LOG) {
            config.log_level = level;
        }
        Ok(config)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}
