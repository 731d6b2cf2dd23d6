//! Configuration types for isosyslog.
//!
//! [`ParserConfig::defaults`] returns the built-in defaults without touching
//! the filesystem. [`ParserConfig::load_from`] layers a TOML file on top of
//! them, for hosts that want to pin how zone-less timestamps are read.

use chrono::FixedOffset;
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[time]
default_offset = "+00:00"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub time: TimeConfig,
}

/// `[time]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeConfig {
    /// Offset applied to header timestamps that carry no `Z` or `±HH:MM`.
    #[serde(default = "default_offset")]
    pub default_offset: String,
}

fn default_offset() -> String { "+00:00".to_string() }

impl Default for TimeConfig {
    fn default() -> Self {
        Self { default_offset: default_offset() }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ParserConfig {
    /// Load `path` layered on top of the built-in defaults. A missing file
    /// yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()?;

        // Surface a bad offset at load time rather than on first parse.
        cfg.time.offset()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

impl TimeConfig {
    /// Parse [`TimeConfig::default_offset`] into a chrono offset.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        parse_offset(&self.default_offset)
            .ok_or_else(|| ConfigError::InvalidOffset(self.default_offset.clone()))
    }
}

// ---------------------------------------------------------------------------
// Offset helpers
// ---------------------------------------------------------------------------

fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
