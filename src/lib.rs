//! isosyslog — parse RFC 3164 syslog lines that carry ISO 8601 timestamps.
//!
//! ```text
//! <15>1987-06-18T18:20:30.337+03:00 server user[42]: Test 123
//!  │  │                             │      │    │    │
//!  │  time (normalised to UTC)      host   │    pid  message
//!  priority → facility / severity          process
//! ```
//!
//! [`parse`] is the entry point; it returns `None` for lines that do not
//! have this shape. [`FACILITY`] and [`SEVERITY`] expose the name tables for
//! callers that want to enumerate valid names and codes.
//!
//! The implementation lives in `isosyslog-core`; this crate re-exports its
//! public surface and hosts the integration harnesses and benches.

pub use isosyslog_core::{
    config, decoder, matcher, parse, tables, ConfigError, NameError, ParsedRecord, Parser,
    ParserConfig, Pid, FACILITY, SEVERITY,
};
