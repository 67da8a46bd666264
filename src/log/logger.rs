use crate::{
    config::LoggerConfig,
    log::{
        log_level::LogLevel, log_msg::LogMsg, log_sink::LogSink, logger_error::LoggerError,
        sink_target::SinkTarget,
    },
};

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Flush threshold used until [`ProcessLogger::set_buffer_size`] is called.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Everything behind the logger's single lock.
struct LoggerState {
    target: SinkTarget,
    console: Box<dyn Write + Send>,
    buffer: String,
    limit: usize,
    /// Set after a threshold flush fails, cleared by the next successful one.
    flush_failing: bool,
}

impl LoggerState {
    /// Writes the whole buffer to the active sink and clears it.
    ///
    /// On failure the buffer is left intact so the same lines are retried on
    /// the next flush.
    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let out: &mut dyn Write = match &mut self.target {
            SinkTarget::Console => self.console.as_mut(),
            SinkTarget::File { file, .. } => file,
        };
        out.write_all(self.buffer.as_bytes())?;
        out.flush()?;

        self.buffer.clear();
        self.flush_failing = false;
        Ok(())
    }

    fn append(&mut self, msg: &LogMsg) {
        msg.render_into(&mut self.buffer);

        if self.buffer.len() >= self.limit {
            // No error channel here; a failed flush keeps the lines buffered
            // for the next attempt. Only the first failure in a row is reported.
            if let Err(e) = self.flush() {
                if !self.flush_failing {
                    eprintln!(
                        "[rustylog] log flush failed: {e}; keeping {} bytes buffered",
                        self.buffer.len()
                    );
                }
                self.flush_failing = true;
            }
        }
    }

    /// Flushes, then drops any open file and falls back to the console.
    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.target = SinkTarget::Console;
        Ok(())
    }
}

/// Buffered, leveled, thread-safe logger writing to a file or the console.
///
/// All state sits behind one `Mutex`; every public operation holds it for its
/// whole duration, so each line lands in the output complete and never
/// interleaved with another caller's line.
///
/// # Architecture
///
/// 1. **Producers**: any thread calls [`log`](Self::log) or one of the level shortcuts.
/// 2. **Buffer**: the rendered line is appended to an in-memory `String`.
/// 3. **Threshold**: once the buffer reaches the configured size it is written
///    to the active sink before `log` returns.
/// 4. **Sink**: the console or an append-mode file, switched with
///    [`set_log_file`](Self::set_log_file).
///
/// The process-wide instance lives in [`instance`](crate::log::instance);
/// tests and embedders can also build private ones with [`new`](Self::new) or
/// [`with_console`](Self::with_console).
pub struct ProcessLogger {
    state: Mutex<LoggerState>,
}

impl ProcessLogger {
    /// Logger writing to standard output with the default 1 KiB threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(Box::new(io::stdout()))
    }

    /// Logger whose console output goes to `console` instead of stdout.
    #[must_use]
    pub fn with_console(console: Box<dyn Write + Send>) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                target: SinkTarget::Console,
                console,
                buffer: String::new(),
                limit: DEFAULT_BUFFER_SIZE,
                flush_failing: false,
            }),
        }
    }

    /// Poisoning is ignored: the buffer is append-only and the sink swap is a
    /// single assignment, so a panicking caller cannot leave the state torn.
    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Redirects output to `path`, or to the console when `path` is empty.
    ///
    /// Lines buffered so far are first flushed to the *current* sink, and a
    /// previously open file is closed, so no line ever moves across a switch.
    /// The file is opened in append mode and created if missing.
    ///
    /// # Errors
    ///
    /// * [`LoggerError::Flush`] if the pending lines could not be written to
    ///   the current sink. Nothing is switched in that case.
    /// * [`LoggerError::OpenLogFile`] if `path` cannot be opened. The logger
    ///   keeps working and writes to the console from then on.
    pub fn set_log_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LoggerError> {
        let path = path.as_ref();
        let mut state = self.lock();

        state.close()?;

        if path.as_os_str().is_empty() {
            return Ok(());
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                state.target = SinkTarget::File {
                    path: path.to_path_buf(),
                    file,
                };
                Ok(())
            }
            Err(source) => Err(LoggerError::OpenLogFile {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Sets the flush threshold in bytes. Zero flushes on every call.
    ///
    /// Takes effect on the next append; the current buffer is not flushed.
    pub fn set_buffer_size(&self, bytes: usize) {
        self.lock().limit = bytes;
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.lock().limit
    }

    /// Bytes rendered but not yet flushed.
    #[must_use]
    pub fn pending_bytes(&self) -> usize {
        self.lock().buffer.len()
    }

    /// Path of the current log file, `None` while writing to the console.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.lock().target.path().map(Path::to_path_buf)
    }

    /// Appends one line at `level` and flushes if the threshold is reached.
    pub fn log(&self, level: LogLevel, message: &str) {
        let mut state = self.lock();
        // Stamped under the lock so lines stay in time order.
        state.append(&LogMsg::new(level, message));
    }

    /// Same as [`log`](Self::log) for a raw severity value. Values outside the
    /// four levels are rendered as `UNKNOWN`.
    pub fn log_raw(&self, raw_level: u8, message: &str) {
        let mut state = self.lock();
        state.append(&LogMsg::from_raw_level(raw_level, message));
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Writes out whatever is buffered, regardless of the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Flush`] if the sink rejects the write; the lines
    /// stay buffered.
    pub fn flush(&self) -> Result<(), LoggerError> {
        self.lock().flush().map_err(LoggerError::Flush)
    }

    /// Teardown: flushes, closes any open file and returns to the console.
    ///
    /// Dropping a `ProcessLogger` does the same. The process-wide instance is
    /// never dropped, so programs call this before exiting.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Flush`] if the final flush fails; the file is
    /// left open in that case.
    pub fn shutdown(&self) -> Result<(), LoggerError> {
        self.lock().close().map_err(LoggerError::Flush)
    }

    /// Applies a `[Logging]` configuration: threshold first, then the sink.
    ///
    /// # Errors
    ///
    /// Same as [`set_log_file`](Self::set_log_file).
    pub fn apply_config(&self, config: &LoggerConfig) -> Result<(), LoggerError> {
        self.set_buffer_size(config.buffer_size);
        match &config.log_file {
            Some(path) => self.set_log_file(path),
            None => self.set_log_file(""),
        }
    }
}

impl Default for ProcessLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProcessLogger {
    fn drop(&mut self) {
        let state = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        let _ = state.close();
    }
}

impl LogSink for ProcessLogger {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str) {
        ProcessLogger::log(self, level, msg);
    }
}

impl std::fmt::Debug for ProcessLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("ProcessLogger")
            .field("target", &state.target)
            .field("pending", &state.buffer.len())
            .field("limit", &state.limit)
            .finish_non_exhaustive()
    }
}
