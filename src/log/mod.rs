//! Buffered, leveled, thread-safe process logger.
//!
//! Lines are rendered as
//! `[YYYY-MM-DD HH:MM:SS.mmm] [LEVEL] [Thread N] message`, collected in memory
//! and written to the console or a file once the buffer reaches its threshold.

pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod logger_error;
pub mod logger_handle;
pub mod sink_target;
pub mod thread_tag;

pub use log_level::LogLevel;
pub use log_msg::LogMsg;
pub use log_sink::LogSink;
pub use logger::{DEFAULT_BUFFER_SIZE, ProcessLogger};
pub use logger_error::LoggerError;
pub use logger_handle::{LoggerHandle, instance};
pub use sink_target::SinkTarget;
