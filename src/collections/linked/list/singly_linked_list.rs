use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::marker::PhantomData;
use std::ops::Index;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfRange};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in one direction, from the head (front) towards the tail (back).
///
/// Nodes are allocated individually and owned by the list as a whole: the head, every link and
/// the tail are plain pointers, and the list frees each node once it has been unlinked. Keeping a
/// pointer to the tail node makes appending `O(1)`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `add_first/last` | `O(1)` |
/// | `remove_first` | `O(1)` |
/// | `remove_last` | `O(n)` |
/// | `get_at` | `O(i)` |
/// | `insert_at` | `O(i)` |
/// | `remove_at` | `O(i)`, `O(n)`* |
/// | `remove` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// `remove_last` has to walk from the head to the node preceding the tail, because nodes don't
/// know their predecessor. This is the price of a single link per node, not something to be fixed
/// here: callers needing `O(1)` removal at both ends want a doubly linked list.
///
/// \* Removing the last element through `remove_at` (or `remove`) goes through `remove_last`.
///
/// # Thread Safety
/// The list performs no synchronization. It can be sent to or shared with another thread when `T`
/// allows it, but concurrent mutation requires an external lock.
pub struct SinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

// SAFETY: Every node is reachable only through this list, so sending the list moves the values and
// nothing else. No node is shared with another list.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}

// SAFETY: Through a shared reference, the list only hands out shared references to its values.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided element to the front of the SinglyLinkedList.
    pub fn add_first(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element to the back of the SinglyLinkedList.
    pub fn add_last(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it.
    pub fn remove_first(&mut self) -> Result<T, EmptyCollection> {
        match mem::take(&mut self.state) {
            Empty => Err(EmptyCollection),
            Full(ListContents { len, head, tail }) => {
                // SAFETY: The state was taken above, so the old head is no longer reachable from
                // the list. Its successor is carried over below.
                let Node { value, next } = unsafe { head.take_node() };

                // The old head has a successor exactly when the list held more than one element.
                // Otherwise the state stays Empty from the take above.
                if let (Some(len), Some(head)) = (len.checked_sub(1), next) {
                    self.state = Full(ListContents { len, head, tail });
                }

                Ok(value)
            },
        }
    }

    /// Removes the last element from the list and returns it.
    ///
    /// This is `O(n)`: the list is walked from the head to find the node that becomes the new
    /// tail.
    pub fn remove_last(&mut self) -> Result<T, EmptyCollection> {
        let contents = match &mut self.state {
            Empty => return Err(EmptyCollection),
            Full(contents) => contents,
        };

        match contents.len.checked_sub(1) {
            Some(new_len) => {
                let before = contents.seek(new_len.get() - 1);
                // UNREACHABLE: before is the second to last node.
                let last = before.next().unreachable();

                before.set_next(None);
                contents.tail = before;
                contents.len = new_len;

                // SAFETY: last was the tail, and neither the chain nor the tail point at it now.
                Ok(unsafe { last.take_node() }.value)
            },
            // A single element is both first and last.
            None => self.remove_first(),
        }
    }

    /// Returns a reference to the element at the provided `index`.
    ///
    /// The same functionality can be achieved using the [`Index`] operator, which panics instead.
    pub fn get_at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        Ok(self.checked_contents(index)?.seek(index).value())
    }

    /// Returns a mutable reference to the element at the provided `index`.
    pub fn get_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        Ok(self.checked_contents_mut(index)?.seek(index).value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting all following elements back by
    /// one. An `index` equal to the length appends the value.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfRange { index, len });
        }

        if index == 0 {
            self.add_first(value);
        } else if index == len {
            self.add_last(value);
        } else if let Full(contents) = &mut self.state {
            contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

            let before = contents.seek(index - 1);
            before.set_next(Some(NodePtr::from_node(Node::new(value, before.next()))));
        }

        Ok(())
    }

    /// Removes the element at `index` and returns it.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        let contents = self.checked_contents_mut(index)?;

        if index == 0 {
            // UNREACHABLE: The index check above means the list isn't empty.
            return Ok(self.remove_first().ok().unreachable());
        }
        if index == contents.last_index() {
            // UNREACHABLE: As above.
            return Ok(self.remove_last().ok().unreachable());
        }

        // The node is neither head nor tail, so it has a predecessor and a successor and the tail
        // pointer is unaffected.
        let before = contents.seek(index - 1);
        // UNREACHABLE: before precedes a middle node.
        let removed = before.next().unreachable();
        before.set_next(removed.next());

        // UNREACHABLE: A middle node exists, so there were at least three elements.
        contents.len = contents.len.checked_sub(1).unreachable();

        // SAFETY: removed has just been unlinked from its predecessor, and it isn't the head or
        // the tail.
        Ok(unsafe { removed.take_node() }.value)
    }

    /// Removes every element from the list. Nodes are unlinked and dropped one at a time, so
    /// clearing (or dropping) a long list doesn't recurse once per node.
    pub fn clear(&mut self) {
        if let Full(contents) = mem::take(&mut self.state) {
            let mut next = Some(contents.head);
            while let Some(node) = next {
                // SAFETY: The state was taken above, so each node is now reachable only from its
                // predecessor, which this loop has already freed.
                next = unsafe { node.take_node() }.next;
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Removes the first element for which `predicate` returns true, returning it.
    pub(crate) fn remove_where<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.iter().position(predicate)?;
        self.remove_at(index).ok()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Removes the first element equal to `value`. Returns whether an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_where(|element| element == value).is_some()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element == value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }
}

impl<T> SinglyLinkedList<T> {
    pub(crate) const fn checked_contents(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfRange> {
        match &self.state {
            Empty => Err(IndexOutOfRange { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfRange { index, len })
                }
            },
        }
    }

    pub(crate) const fn checked_contents_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfRange> {
        match &mut self.state {
            Empty => Err(IndexOutOfRange { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfRange { index, len })
                }
            },
        }
    }

    /// Walks the chain and checks that the stored length and tail agree with it.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    count += 1;
                    curr = next;
                }
                assert_eq!(count, len.get(), "Stored length should match the chain.");
                assert!(curr == *tail, "Tail should point at the last node of the chain.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Returns the node at `index`, which the caller has already checked to be in bounds.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        let mut node = self.head;
        for _ in 0..index {
            node = node.next().unreachable();
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
        self.head = NodePtr::from_node(Node::new(value, Some(self.head)));
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node::new(value, None));
        self.tail.set_next(Some(node));
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node::new(value, None));

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get_at(index).throw()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
