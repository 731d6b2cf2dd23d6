//! Parser — match, decode, assemble.
//!
//! A [`Parser`] holds only its resolved configuration, so it is cheap to
//! clone and safe to share between threads. The free function [`parse`]
//! uses the built-in defaults.

use chrono::FixedOffset;

use crate::config::ParserConfig;
use crate::decoder::{decode_pid, decode_priority, decode_time, split_priority};
use crate::error::ConfigError;
use crate::matcher::match_line;
use crate::tables::{facility_name, severity_name};
use crate::types::ParsedRecord;

/// Syslog line parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    default_offset: FixedOffset,
}

impl Default for Parser {
    fn default() -> Self {
        Self::utc()
    }
}

impl Parser {
    /// Build a parser from configuration, resolving the default offset once.
    pub fn new(config: &ParserConfig) -> Result<Self, ConfigError> {
        Ok(Self { default_offset: config.time.offset()? })
    }

    /// Parser that reads zone-less timestamps as UTC.
    pub fn utc() -> Self {
        Self::with_default_offset(FixedOffset::east_opt(0).expect("zero offset is in range"))
    }

    pub fn with_default_offset(default_offset: FixedOffset) -> Self {
        Self { default_offset }
    }

    pub fn default_offset(&self) -> FixedOffset {
        self.default_offset
    }

    /// Parse one line. `None` means the line is not a syslog header of the
    /// expected shape; it is not an error.
    pub fn parse(&self, line: &str) -> Option<ParsedRecord> {
        let Some(raw) = match_line(line) else {
            tracing::trace!(len = line.len(), "line does not match syslog header");
            return None;
        };

        let (facility_code, severity_code) = split_priority(decode_priority(raw.priority));

        Some(ParsedRecord {
            facility: facility_name(facility_code),
            facility_code,
            severity: severity_name(severity_code),
            severity_code,
            time: decode_time(raw.time, self.default_offset),
            host: raw.host.to_string(),
            process: raw.process.to_string(),
            pid: raw.pid.map(decode_pid),
            message: raw.message.to_string(),
        })
    }
}

/// Parse one line with the default configuration.
pub fn parse(line: &str) -> Option<ParsedRecord> {
    Parser::utc().parse(line)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
