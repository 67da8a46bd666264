use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` or `peek` on an empty queue.
    Underflow,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Underflow => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}
