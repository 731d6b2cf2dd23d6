//! Error types for isosyslog-core.
//!
//! Parsing itself never fails: a line that does not fit the header grammar
//! is reported as `None`. These errors cover the surrounding surface only.

use thiserror::Error;

/// A facility or severity name that is not in the canonical tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("unknown syslog facility: {0:?}")]
    UnknownFacility(String),
    #[error("unknown syslog severity: {0:?}")]
    UnknownSeverity(String),
}

/// A configuration value that deserialized but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid time.default_offset {0:?}: expected \"Z\" or \"+HH:MM\"/\"-HH:MM\"")]
    InvalidOffset(String),
}
