//! Logging setup on top of `tracing`.
//!
//! The library only emits events. Nothing is written anywhere until a host
//! installs a subscriber, either its own or the one built here.

use tracing_subscriber::EnvFilter;

use super::config::{AppCfg, LogFormat};
use super::error::{DistError, DistResult};

/// Install a global `fmt` subscriber writing to stderr.
///
/// Calling this more than once, or after the host installed its own
/// subscriber, leaves the existing subscriber in place and returns `Ok`.
pub fn init(cfg: &AppCfg) -> DistResult<()> {
    let filter = EnvFilter::try_new(&cfg.log_filter)
        .map_err(|_| DistError::invalid_config("invalid log filter directive"))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match cfg.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        tracing::debug!("global subscriber already installed, keeping it");
    }

    Ok(())
}

/// Load configuration from the environment and install the subscriber.
pub fn init_from_env() -> DistResult<()> {
    init(&AppCfg::load()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::DistCode;

    #[test]
    fn init_is_idempotent() {
        let cfg = AppCfg::default();
        assert!(init(&cfg).is_ok());
        assert!(init(&cfg).is_ok());
    }

    #[test]
    fn rejects_malformed_filter() {
        let cfg = AppCfg {
            log_filter: "pointdist=[".to_string(),
            log_format: LogFormat::Json,
        };
        assert_eq!(init(&cfg).unwrap_err().code, DistCode::InvalidConfig);
    }
}
