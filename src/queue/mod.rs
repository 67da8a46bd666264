//! Singly-linked FIFO queue.

pub mod linked_queue;
pub mod queue_error;

pub use linked_queue::LinkedQueue;
pub use queue_error::QueueError;
