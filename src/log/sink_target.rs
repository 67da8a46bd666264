use std::{
    fs::File,
    path::{Path, PathBuf},
};

/// Where flushed lines go.
///
/// The logger starts on `Console` and only moves between the two states
/// through [`ProcessLogger::set_log_file`](crate::log::ProcessLogger::set_log_file).
/// Dropping the `File` variant closes the handle.
#[derive(Debug, Default)]
pub enum SinkTarget {
    #[default]
    Console,
    File { path: PathBuf, file: File },
}

impl SinkTarget {
    /// Path of the open log file, `None` while on the console.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            SinkTarget::Console => None,
            SinkTarget::File { path, .. } => Some(path),
        }
    }
}
