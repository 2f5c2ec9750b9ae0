use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{InOrder, Link, Node, PostOrder, PreOrder, Shape};
use crate::collections::stack::Stack;

/// An ordered set of values, stored in an unbalanced binary search tree.
///
/// For every node, all values in its left subtree are less than its own value and all values in
/// its right subtree are greater. Equal values are never stored twice: inserting a value that is
/// already present leaves the tree untouched and isn't an error.
///
/// The tree doesn't rebalance itself, so inserting values in sorted order produces a tree shaped
/// like a list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BinarySearchTree.
/// - `h`: The height of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `height` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct BinarySearchTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree: `-1` for an empty tree, `0` for a single node and otherwise
    /// the number of links on the longest path from the root to a leaf.
    ///
    /// This is computed recursively on every call.
    pub fn height(&self) -> isize {
        Node::height(&self.root)
    }

    /// Returns the smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.len = 0;

        // Detach children before each node is dropped, so that dropping a deep tree doesn't
        // recurse once per level.
        let mut pending = Stack::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }

        while let Ok(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
    }

    /// Returns an iterator over the values in ascending order (left, self, right).
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.root, self.len)
    }

    /// Returns an iterator over the values with each node before its subtrees (self, left, right).
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.root, self.len)
    }

    /// Returns an iterator over the values with each node after its subtrees (left, right, self).
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.root, self.len)
    }

    /// Returns an iterator over the values in ascending order. Equivalent to
    /// [`in_order`](BinarySearchTree::in_order).
    pub fn iter(&self) -> InOrder<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` as a new leaf. Returns false, leaving the tree unchanged, if an equal value
    /// is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            match value.cmp(&node.value) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
        }

        *slot = Some(Box::new(Node::leaf(value)));
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Removes the value equal to `value`. Returns whether a value was removed.
    ///
    /// A node with two children isn't unlinked itself. Instead, its in-order successor (the
    /// leftmost node of its right subtree) is unlinked and the successor's value moves into the
    /// node. The successor never has a left child, so unlinking it only ever splices in its right
    /// subtree.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(slot) = Node::find_slot(&mut self.root, value) else {
            return false;
        };
        let Some(mut target) = slot.take() else {
            return false;
        };

        *slot = match (target.left.take(), target.right.take()) {
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some(successor) = Node::take_min(&mut right) {
                    target.value = successor.value;
                }

                target.left = Some(left);
                target.right = right;
                Some(target)
            },
            // Zero or one child: the child (if any) takes the target's place.
            (child, None) | (None, child) => child,
        };

        self.len -= 1;
        true
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &Shape(&self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
