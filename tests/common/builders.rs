//! Test builders — ergonomic constructors for syslog lines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

// ---------------------------------------------------------------------------
// LineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for syslog header lines.
///
/// # Example
///
/// ```rust
/// let line = LineBuilder::new("Test 123")
///     .priority(1 * 8 + 7)
///     .pid("42")
///     .build();
/// ```
pub struct LineBuilder {
    priority: String,
    time: String,
    host: String,
    process: String,
    pid: Option<String>,
    separator: &'static str,
    message: String,
}

impl LineBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            priority: "15".to_string(),
            time: "1987-06-18T15:20:30.337Z".to_string(),
            host: "server".to_string(),
            process: "user".to_string(),
            pid: None,
            separator: ": ",
            message: message.into(),
        }
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority.to_string();
        self
    }

    /// Raw priority text, for digit strings that do not fit a `u32`.
    pub fn priority_text(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn process(mut self, process: impl Into<String>) -> Self {
        self.process = process.into();
        self
    }

    pub fn pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = Some(pid.into());
        self
    }

    /// One of `": "`, `":"` or `" "`.
    pub fn separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    pub fn build(self) -> String {
        let pid = self.pid.map(|p| format!("[{p}]")).unwrap_or_default();
        format!(
            "<{}>{} {} {}{}{}{}",
            self.priority, self.time, self.host, self.process, pid, self.separator, self.message
        )
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A well-formed line with the given priority and default everything else.
pub fn line_with_priority(priority: u32) -> String {
    LineBuilder::new("test").priority(priority).build()
}

/// A well-formed line with the given header timestamp.
pub fn line_with_time(time: &str) -> String {
    LineBuilder::new("Test 123").time(time).build()
}
