use std::fmt::{self, Debug, Display, Formatter};

use super::{IntoIter, Iter};
use crate::collections::linked::SinglyLinkedList;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::fmt::DebugEntries;

/// A last-in first-out collection. The top of the stack is the head of the underlying
/// [`SinglyLinkedList`], so every operation here is `O(1)`.
///
/// The most recently pushed value that hasn't been popped is always the next one out.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack {
            list: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.list.add_first(value);
    }

    /// Removes the value on top of the Stack and returns it.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.list.remove_first()
    }

    /// Returns a reference to the value on top of the Stack without removing it.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.list.front().ok_or(EmptyCollection)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.list.front_mut().ok_or(EmptyCollection)
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the Stack from top to bottom, the order in which [`Stack::pop`]
    /// would return the values.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes each item in turn, so the last item of `iter` ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.list.into_iter())
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_to_bottom", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
