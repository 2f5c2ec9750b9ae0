use std::iter::FusedIterator;

use super::{BinarySearchTree, Link, Node};
use crate::collections::stack::Stack;

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// A borrowed iterator over a tree's values in ascending order.
///
/// The stack holds the nodes whose left subtree is being visited, innermost on top.
pub struct InOrder<'a, T> {
    pub(crate) pending: Stack<&'a Node<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> InOrder<'a, T> {
        let mut iter = InOrder {
            pending: Stack::new(),
            remaining: len,
        };
        iter.push_left_edge(root.as_deref());
        iter
    }

    fn push_left_edge(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.pending.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop().ok()?;
        self.push_left_edge(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

impl<'a, T> ExactSizeIterator for InOrder<'a, T> {}

/// A borrowed iterator over a tree's values, visiting each node before its left and then right
/// subtree.
pub struct PreOrder<'a, T> {
    pub(crate) pending: Stack<&'a Node<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> PreOrder<'a, T> {
        let mut pending = Stack::new();
        if let Some(root) = root.as_deref() {
            pending.push(root);
        }

        PreOrder {
            pending,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop().ok()?;

        // Right goes in first so that the left subtree comes out first.
        if let Some(right) = node.right.as_deref() {
            self.pending.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.pending.push(left);
        }

        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

impl<'a, T> ExactSizeIterator for PreOrder<'a, T> {}

/// A borrowed iterator over a tree's values, visiting each node after its left and then right
/// subtree.
pub struct PostOrder<'a, T> {
    /// Each node is pushed twice: first unexpanded, then (once its children are queued above it)
    /// expanded, which is when its value is yielded.
    pub(crate) pending: Stack<(&'a Node<T>, bool)>,
    pub(crate) remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> PostOrder<'a, T> {
        let mut pending = Stack::new();
        if let Some(root) = root.as_deref() {
            pending.push((root, false));
        }

        PostOrder {
            pending,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.pending.pop().ok()?;

            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }

            self.pending.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.pending.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.pending.push((left, false));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}

impl<'a, T> ExactSizeIterator for PostOrder<'a, T> {}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator over a tree's values in ascending order.
pub struct IntoIter<T>(pub(crate) BinarySearchTree<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // Each step takes O(h) to find the minimum again, but leaves a valid tree behind.
        let min = Node::take_min(&mut self.0.root)?;
        self.0.len -= 1;
        Some(min.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
