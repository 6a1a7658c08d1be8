//! Shared utilities: error codes, configuration and logging.
pub mod config;
pub mod error;
pub mod log;

pub use error::{DistCode, DistError, DistResult};
