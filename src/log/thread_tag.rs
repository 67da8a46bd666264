//! Small per-thread identifiers for the `[Thread N]` column.
//!
//! `std::thread::ThreadId` has no stable integer form, so every thread that
//! logs is handed the next value of a process-wide counter the first time it
//! asks. The value stays the same for the rest of that thread's life.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static TAG: u64 = NEXT_TAG.fetch_add(1, Ordering::Relaxed);
}

/// Identifier of the calling thread.
#[must_use]
pub fn current() -> u64 {
    TAG.with(|tag| *tag)
}
