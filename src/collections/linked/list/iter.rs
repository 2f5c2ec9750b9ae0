use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{Link, ListContents, ListState, SinglyLinkedList};

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // The list already knows how to give up its head in O(1), so just hold it and keep removing.
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        match &self.state {
            Empty => Iter {
                next: None,
                len: 0,
                _phantom: PhantomData,
            },
            Full(ListContents { len, head, .. }) => Iter {
                next: Some(*head),
                len: len.get(),
                _phantom: PhantomData,
            },
        }
    }
}

/// A borrowed iterator from head to tail. It only reads the nodes, so calling
/// [`SinglyLinkedList::iter`] again restarts from the head and yields the same sequence as long as
/// the list wasn't modified in between.
pub struct Iter<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

// SAFETY: Iter only hands out shared references to the values of a borrowed list.
unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}

// SAFETY: As above.
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            self.len -= 1;
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        match &mut self.state {
            Empty => IterMut {
                next: None,
                len: 0,
                _phantom: PhantomData,
            },
            Full(ListContents { len, head, .. }) => IterMut {
                next: Some(*head),
                len: len.get(),
                _phantom: PhantomData,
            },
        }
    }
}

/// A mutably borrowed iterator from head to tail. Each node is visited once, so the references it
/// yields never alias.
pub struct IterMut<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

// SAFETY: IterMut acts as a unique borrow of the list's values.
unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}

// SAFETY: Sharing IterMut only allows reading its position, never the values.
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next();
            self.len -= 1;
            node.value_mut()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}
