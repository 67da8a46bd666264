use std::{
    ops::Deref,
    sync::{Arc, OnceLock},
};

use crate::log::{log_level::LogLevel, log_sink::LogSink, logger::ProcessLogger};

/// Lightweight, cloneable handle to a [`ProcessLogger`].
///
/// Every clone points at the same logger, so state changes made through one
/// handle (a new log file, a new threshold) are seen by all of them. The
/// logger is torn down, flushing its buffer, when the last handle is dropped.
///
/// Typical usage is to build one at startup (or take the process-wide one
/// from [`instance`]) and clone it into each module or thread.
///
/// # Examples
/// ```
/// use rustylog::log::{LoggerHandle, ProcessLogger};
///
/// let handle = LoggerHandle::new(ProcessLogger::new());
/// let worker = handle.clone();
/// std::thread::spawn(move || worker.info("started task")).join().unwrap();
/// assert!(handle.pending_bytes() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct LoggerHandle {
    inner: Arc<ProcessLogger>,
}

impl LoggerHandle {
    #[must_use]
    pub fn new(logger: ProcessLogger) -> Self {
        Self {
            inner: Arc::new(logger),
        }
    }

    /// True when both handles refer to the same logger.
    #[must_use]
    pub fn same_logger(&self, other: &LoggerHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for LoggerHandle {
    type Target = ProcessLogger;

    fn deref(&self) -> &ProcessLogger {
        &self.inner
    }
}

impl LogSink for LoggerHandle {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str) {
        self.inner.log(level, msg);
    }
}

static INSTANCE: OnceLock<LoggerHandle> = OnceLock::new();

/// The process-wide logger, created on first use.
///
/// Concurrent first calls race on a `OnceLock`: exactly one logger is built
/// and every caller gets the same one. It writes to stdout with the default
/// threshold until configured. Call
/// [`shutdown`](ProcessLogger::shutdown) on it before the process exits.
pub fn instance() -> &'static LoggerHandle {
    INSTANCE.get_or_init(|| LoggerHandle::new(ProcessLogger::new()))
}
