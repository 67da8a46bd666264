use std::{fmt, io, path::PathBuf};

/// Errors reported by [`ProcessLogger`](crate::log::ProcessLogger).
#[derive(Debug)]
pub enum LoggerError {
    /// The requested log file could not be opened for appending. The logger
    /// has fallen back to the console.
    OpenLogFile { path: PathBuf, source: io::Error },
    /// Writing the buffered lines to the active sink failed. The buffer is
    /// kept and retried on the next flush.
    Flush(io::Error),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenLogFile { path, source } => {
                write!(f, "failed to open log file {}: {source}", path.display())
            }
            Self::Flush(e) => write!(f, "failed to flush log buffer: {e}"),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenLogFile { source, .. } => Some(source),
            Self::Flush(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        Self::Flush(e)
    }
}
