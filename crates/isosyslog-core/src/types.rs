//! Core types for isosyslog-core.
//!
//! This module defines the structured output of a successful parse: the
//! [`ParsedRecord`] and its optional [`Pid`].

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A syslog line decoded into its header fields and message body.
///
/// Records are built in one step at the end of a successful parse and are
/// never partially populated. Serializing a record with `serde` yields the
/// camelCase object shape (`facilityCode`, `severityCode`, …) with the `pid`
/// key left out entirely when the line carried no bracket segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    /// Canonical facility name; `None` when the code is past the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<&'static str>,
    /// `priority >> 3`.
    pub facility_code: u32,
    /// Canonical severity name; `None` when the code is past the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<&'static str>,
    /// `priority & 7`.
    pub severity_code: u32,
    /// Header timestamp normalised to UTC. `None` marks a timestamp that
    /// matched the header shape but is not a valid calendar time.
    pub time: Option<DateTime<Utc>>,
    /// Host as written: DNS name, IPv4 or IPv6 literal.
    pub host: String,
    /// Tag / app-name preceding the optional pid bracket.
    pub process: String,
    /// Bracketed pid, absent when the line had no `[...]` after the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<Pid>,
    /// Everything after the header separator, verbatim.
    pub message: String,
}

impl ParsedRecord {
    /// Priority value reassembled from the facility and severity codes.
    pub fn priority(&self) -> u32 {
        crate::tables::encode_priority(self.facility_code, self.severity_code)
    }
}

/// Contents of the `[...]` segment following the process tag.
///
/// Conventionally numeric, but any bracket text is accepted (Heroku uses
/// tags such as `heroku[router]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Pid {
    /// All-digit bracket contents.
    Number(u64),
    /// Anything else, including the empty string.
    Text(String),
}

impl Pid {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Pid::Number(n) => Some(*n),
            Pid::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pid::Number(n) => write!(f, "{n}"),
            Pid::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Pid {
    fn from(n: u64) -> Self {
        Pid::Number(n)
    }
}

impl From<&str> for Pid {
    fn from(s: &str) -> Self {
        Pid::Text(s.to_string())
    }
}
