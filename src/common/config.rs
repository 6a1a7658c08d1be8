//! Runtime configuration loaded from the process environment.

use std::env;
use std::str::FromStr;

use super::error::{DistError, DistResult};

pub const LOG_FILTER_VAR: &str = "POINTDIST_LOG";
pub const LOG_FORMAT_VAR: &str = "POINTDIST_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Output format for log lines.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = DistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(DistError::invalid_config("unknown log format")),
        }
    }
}

/// Snapshot of configuration values consumed by the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppCfg {
    /// `tracing` env-filter directive, e.g. `pointdist=debug`.
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl AppCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> DistResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> DistResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}
