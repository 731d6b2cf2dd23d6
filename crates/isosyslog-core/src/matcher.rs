//! Matcher — recognises the header grammar and slices out raw captures.
//!
//! ```text
//! <PRI>YYYY-MM-DDThh:mm:ss[.fff][Z|±hh:mm] HOST TAG[PID]: MESSAGE
//! ```
//!
//! The match is anchored at the start of the line only. The tag capture is
//! lazy so that a trailing `[pid]` segment is never swallowed into it, and
//! the separator after the tag may be `": "`, `":"` or a bare space.

use regex::Regex;
use std::sync::LazyLock;

/// Non-whitespace, where whitespace is the ECMAScript `\s` set: ASCII
/// blanks, U+00A0, U+1680, U+2000–U+200A, the line/paragraph separators,
/// U+202F, U+205F, U+3000 and U+FEFF. Unlike Unicode `\S`, U+0085 is not
/// whitespace here and U+FEFF is.
const NON_SPACE: &str =
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static RFC3164_WITH_ISO8601_TIME: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = [
        "^",
        r"<([0-9]+)>",                                  // priority
        r"([0-9]+-[0-9]+-[0-9]+T", NON_SPACE, "+)",     // time
        " (", NON_SPACE, "+)",                          // host
        " (?:(", NON_SPACE, r"+?)(?:\[([^\]]*)\])?)",   // tag + optional pid
        r"(?: |: ?)",                                   // separator
        r"([^\r\n\x{2028}\x{2029}]*)",                  // message
    ]
    .concat();
    Regex::new(&pattern).expect("header pattern is a valid regex")
});

/// Borrowed captures of a matching header, in line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub priority: &'a str,
    pub time: &'a str,
    pub host: &'a str,
    pub process: &'a str,
    /// `None` when no bracket followed the tag; `Some("")` for `[]`.
    pub pid: Option<&'a str>,
    pub message: &'a str,
}

/// Match `line` against the header grammar.
///
/// Returns `None` unless the whole header is present starting at the first
/// byte of the line.
pub fn match_line(line: &str) -> Option<RawFields<'_>> {
    let caps = RFC3164_WITH_ISO8601_TIME.captures(line)?;
    // Groups 1-4 and 6 are not optional; a successful match always sets them.
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    Some(RawFields {
        priority: group(1),
        time: group(2),
        host: group(3),
        process: group(4),
        pid: caps.get(5).map(|m| m.as_str()),
        message: group(6),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
