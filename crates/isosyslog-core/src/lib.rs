//! isosyslog-core — parser for RFC 3164 syslog lines with ISO 8601 time.
//!
//! One line in, one [`ParsedRecord`] or `None` out. The work is split into
//! three layers, each a public module so tests and benches can reach them:
//!
//! ```text
//! line ──► matcher ──► decoder ──► ParsedRecord
//!                        │
//!                        └──► tables (facility / severity names)
//! ```
//!
//! Parsing is pure: no I/O, no shared mutable state, nothing carried between
//! calls. The lookup tables are constants.

pub mod config;
pub mod decoder;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod tables;
pub mod types;

pub use crate::config::ParserConfig;
pub use error::{ConfigError, NameError};
pub use parser::{parse, Parser};
pub use tables::{FACILITY, SEVERITY};
pub use types::{ParsedRecord, Pid};
