//! rustylog is a small buffered process logger.
//!
//! Log lines are timestamped, leveled and tagged with the calling thread,
//! collected in memory and written to the console or an append-mode file
//! whenever the buffer reaches a configurable size.
//!
//! The crate is structured into a few modules, one concern each.

/// Handles configuration loading and management.
pub mod config;
/// The process logger, its handle, sinks and macros.
pub mod log;
/// Singly-linked FIFO queue.
pub mod queue;
