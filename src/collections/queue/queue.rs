use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::stack::Stack;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::fmt::DebugEntries;

/// A first-in first-out collection made of two [`Stack`]s.
///
/// Enqueued values are pushed onto `inbound`. Values leave from `outbound`, which is refilled only
/// once it is empty by popping every value off `inbound` and pushing it onto `outbound`. Moving
/// values across reverses them, which puts the oldest value on top.
///
/// At any time the queue's order is `outbound` from top to bottom, followed by `inbound` from
/// bottom to top.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)`*, `O(n)` |
/// | `peek` | `O(1)`*, `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized. Each value is pushed at most twice (once when enqueued and once when moved to
/// `outbound`) and popped at most twice, so a single `O(n)` transfer is paid for by the `n`
/// enqueues before it.
#[derive(Clone)]
pub struct Queue<T> {
    pub(crate) inbound: Stack<T>,
    pub(crate) outbound: Stack<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue<T> {
        Queue {
            inbound: Stack::new(),
            outbound: Stack::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inbound.len() + self.outbound.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `value` to the back of the Queue.
    pub fn enqueue(&mut self, value: T) {
        self.inbound.push(value);
    }

    /// Removes the value at the front of the Queue and returns it.
    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.ensure_outbound();
        self.outbound.pop()
    }

    /// Returns a reference to the value at the front of the Queue without removing it.
    ///
    /// This requires mutable access because the front might still be at the bottom of `inbound`,
    /// in which case the values are moved across first.
    pub fn peek(&mut self) -> Result<&T, EmptyCollection> {
        self.ensure_outbound();
        self.outbound.peek()
    }

    pub fn clear(&mut self) {
        self.inbound.clear();
        self.outbound.clear();
    }

    /// Refills `outbound` from `inbound` if (and only if) it is empty.
    fn ensure_outbound(&mut self) {
        if !self.outbound.is_empty() { return; }

        while let Ok(value) = self.inbound.pop() {
            self.outbound.push(value);
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator that dequeues until the Queue is empty.
pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("outbound", &DebugEntries(self.outbound.iter()))
            .field("inbound", &DebugEntries(self.inbound.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Before a transfer the front is the bottom of inbound, which is the tail of its list.
        match self.outbound.peek().ok().or(self.inbound.list.back()) {
            Some(front) => write!(f, "Queue(front: {front:?}, len: {})", self.len()),
            None => write!(f, "Queue(empty)"),
        }
    }
}
