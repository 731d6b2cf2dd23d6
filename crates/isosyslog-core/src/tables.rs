//! Facility and severity lookup tables.
//!
//! Both tables are indexed by their numeric code, as defined in RFC 3164
//! section 4.1.1. Names follow common `<syslog.h>` naming.
//!
//! Forward lookups (code → name) go through the arrays; reverse lookups
//! (name → code) go through compile-time perfect hash maps so they cost no
//! allocation and no start-up work.

use crate::error::NameError;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Facility names, indexed by facility code (0–23).
pub const FACILITY: [&str; 24] = [
    "kern", "user", "mail", "daemon", "auth", "syslog", "lpr", "news", "uucp", "cron",
    "authpriv", "ftp", "ntp", "logaudit", "logalert", "clock", "local0", "local1", "local2",
    "local3", "local4", "local5", "local6", "local7",
];

/// Severity names, indexed by severity code (0–7).
pub const SEVERITY: [&str; 8] = [
    "emerg", "alert", "crit", "err", "warning", "notice", "info", "debug",
];

static FACILITY_CODES: phf::Map<&'static str, u32> = phf::phf_map! {
    "kern" => 0,
    "user" => 1,
    "mail" => 2,
    "daemon" => 3,
    "auth" => 4,
    "syslog" => 5,
    "lpr" => 6,
    "news" => 7,
    "uucp" => 8,
    "cron" => 9,
    "authpriv" => 10,
    "ftp" => 11,
    "ntp" => 12,
    "logaudit" => 13,
    "logalert" => 14,
    "clock" => 15,
    "local0" => 16,
    "local1" => 17,
    "local2" => 18,
    "local3" => 19,
    "local4" => 20,
    "local5" => 21,
    "local6" => 22,
    "local7" => 23,
};

static SEVERITY_CODES: phf::Map<&'static str, u32> = phf::phf_map! {
    "emerg" => 0,
    "alert" => 1,
    "crit" => 2,
    "err" => 3,
    "warning" => 4,
    "notice" => 5,
    "info" => 6,
    "debug" => 7,
};

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Canonical name for a facility code, or `None` past the end of the table.
pub fn facility_name(code: u32) -> Option<&'static str> {
    FACILITY.get(code as usize).copied()
}

/// Canonical name for a severity code, or `None` past the end of the table.
pub fn severity_name(code: u32) -> Option<&'static str> {
    SEVERITY.get(code as usize).copied()
}

/// Facility code for a canonical (lowercase) name.
pub fn facility_code(name: &str) -> Option<u32> {
    FACILITY_CODES.get(name).copied()
}

/// Severity code for a canonical (lowercase) name.
pub fn severity_code(name: &str) -> Option<u32> {
    SEVERITY_CODES.get(name).copied()
}

/// Like [`facility_code`], but reports an unknown name as an error.
pub fn parse_facility(name: &str) -> Result<u32, NameError> {
    facility_code(name).ok_or_else(|| NameError::UnknownFacility(name.to_string()))
}

/// Like [`severity_code`], but reports an unknown name as an error.
pub fn parse_severity(name: &str) -> Result<u32, NameError> {
    severity_code(name).ok_or_else(|| NameError::UnknownSeverity(name.to_string()))
}

/// Combine a facility and severity code into a priority value.
pub fn encode_priority(facility_code: u32, severity_code: u32) -> u32 {
    (facility_code << 3) | (severity_code & 7)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
