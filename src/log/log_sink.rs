use crate::log::log_level::LogLevel;

/// Anything that accepts leveled log lines.
///
/// Components take an `Arc<dyn LogSink>` instead of reaching for the global
/// logger so tests can hand them a private
/// [`ProcessLogger`](crate::log::ProcessLogger) or their own recorder.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str);
}
