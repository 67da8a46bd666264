use chrono::{DateTime, Local};

use crate::log::{log_level::LogLevel, thread_tag};

/// `strftime` pattern for the timestamp column, millisecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Represents a single log message event.
///
/// This struct captures everything rendered on one output line: when it was
/// produced, its severity label, the calling thread and the message itself.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// Severity name (`DEBUG`, `INFO`, `WARNING`, `ERROR` or `UNKNOWN`).
    pub label: &'static str,
    /// Local wall-clock time of the event.
    pub timestamp: DateTime<Local>,
    /// Identifier of the thread that produced the event.
    pub thread: u64,
    /// The actual content of the log message. Written verbatim.
    pub text: String,
}

impl LogMsg {
    /// Creates a new `LogMsg` stamped with the current local time and the
    /// calling thread's identifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rustylog::log::{LogLevel, LogMsg};
    ///
    /// let msg = LogMsg::new(LogLevel::Info, "Connection established");
    /// assert!(msg.render().contains("[INFO]"));
    /// ```
    pub fn new(level: LogLevel, text: impl Into<String>) -> Self {
        Self::with_label(level.as_str(), text)
    }

    /// Same as [`new`](Self::new) for a raw severity value; values outside the
    /// known levels are labelled `UNKNOWN`.
    pub fn from_raw_level(raw: u8, text: impl Into<String>) -> Self {
        Self::with_label(LogLevel::label_for_raw(raw), text)
    }

    fn with_label(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            timestamp: Local::now(),
            thread: thread_tag::current(),
            text: text.into(),
        }
    }

    /// Appends the rendered line, newline included, to `out`.
    ///
    /// Shape: `[<timestamp>] [<LEVEL>] [Thread <id>] <message>`
    pub fn render_into(&self, out: &mut String) {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "[{}] [{}] [Thread {}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.label,
            self.thread,
            self.text
        );
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(48 + self.text.len());
        self.render_into(&mut out);
        out
    }
}
