/// Defines the severity levels for log messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Fine-grained events that are mostly useful while debugging.
    Debug = 0,
    /// Progress of the application at a coarse-grained level.
    Info = 1,
    /// Potentially harmful situations.
    Warning = 2,
    /// Error events that might still allow the application to keep running.
    Error = 3,
}

/// Label rendered for raw level values outside the known set.
pub const UNKNOWN_LEVEL: &str = "UNKNOWN";

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Upper-case name used in the rendered line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Maps a raw discriminant back to a level, if it is one.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Name for a raw discriminant; `UNKNOWN` when it is out of range.
    #[must_use]
    pub const fn label_for_raw(raw: u8) -> &'static str {
        match Self::from_raw(raw) {
            Some(level) => level.as_str(),
            None => UNKNOWN_LEVEL,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
