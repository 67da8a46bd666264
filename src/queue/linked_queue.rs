use std::ptr::NonNull;

use crate::queue::queue_error::QueueError;

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// FIFO queue over a singly-linked list of owned nodes.
///
/// `enqueue` is O(1) thanks to a pointer to the last node. `dequeue` and
/// `peek` on an empty queue return [`QueueError::Underflow`] and leave the
/// queue untouched.
pub struct LinkedQueue<T> {
    front: Option<Box<Node<T>>>,
    /// Last node of the chain owned by `front`; `None` iff the queue is empty.
    rear: Option<NonNull<Node<T>>>,
    size: usize,
}

// SAFETY: `rear` only ever points into nodes owned by `front`, so the queue
// owns all of its data exactly like a `Box` chain would.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: None,
            rear: None,
            size: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        let mut node = Box::new(Node {
            data: value,
            next: None,
        });
        let new_rear = NonNull::from(node.as_mut());

        match self.rear {
            None => self.front = Some(node),
            // SAFETY: `rear` points at the last node of the live chain and we
            // hold `&mut self`, so no other reference to it exists.
            Some(mut rear) => unsafe { rear.as_mut().next = Some(node) },
        }
        self.rear = Some(new_rear);
        self.size += 1;
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let node = self.front.take().ok_or(QueueError::Underflow)?;
        let Node { data, next } = *node;
        self.front = next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.size -= 1;
        Ok(data)
    }

    /// Borrows the front element.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.front
            .as_deref()
            .map(|n| &n.data)
            .ok_or(QueueError::Underflow)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop can overflow the
        // stack on long queues.
        let mut cur = self.front.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}
