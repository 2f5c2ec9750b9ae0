use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};

use crate::collections::stack::Stack;

/// An owning link to a subtree. Every node is reachable through exactly one link.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    /// The height of the subtree behind `link`: -1 when empty, 0 for a single node.
    pub fn height(link: &Link<T>) -> isize {
        match link {
            Some(node) => 1 + cmp::max(Node::height(&node.left), Node::height(&node.right)),
            None => -1,
        }
    }

    /// Unlinks the leftmost node of the subtree behind `slot` and returns it. The node's right
    /// subtree (it has no left one) takes its place.
    pub fn take_min(mut slot: &mut Link<T>) -> Option<Box<Node<T>>> {
        while slot.as_ref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }

        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min)
    }
}

impl<T: Ord> Node<T> {
    /// Follows the ordering from `slot` down to the link that owns the node equal to `value`.
    pub fn find_slot<'a>(mut slot: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>> {
        loop {
            match value.cmp(&slot.as_ref()?.value) {
                Ordering::Less => slot = &mut slot.as_mut()?.left,
                Ordering::Greater => slot = &mut slot.as_mut()?.right,
                Ordering::Equal => return Some(slot),
            }
        }
    }
}

/// Draws a subtree on its side: left children above their parent, right children below. Every
/// line is prefixed with one marker per branch taken from the root to reach it.
///
/// The drawing is produced with an explicit stack of pending lines, so a list-shaped tree can't
/// overflow the call stack. The output itself still grows with `n * h` for a tree of height `h`,
/// which makes it suited to inspecting small trees rather than logging large ones.
pub(crate) struct Shape<'a, T>(pub &'a Link<T>);

enum Line<'a, T> {
    Subtree(&'a Link<T>, String),
    Value(&'a T, String),
}

impl<T: Debug> Debug for Shape<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pending = Stack::new();
        pending.push(Line::Subtree(self.0, String::new()));

        let mut first = true;
        while let Ok(line) = pending.pop() {
            match line {
                Line::Subtree(Some(node), prefix) => {
                    // Pushed in reverse, so the left subtree is drawn first.
                    pending.push(Line::Subtree(&node.right, format!("{prefix}└    ")));
                    pending.push(Line::Value(&node.value, prefix.clone()));
                    pending.push(Line::Subtree(&node.left, format!("{prefix}┌    ")));
                    continue;
                },
                _ if first => first = false,
                _ => writeln!(f)?,
            }

            match line {
                Line::Subtree(_, prefix) => write!(f, "{prefix}-")?,
                Line::Value(value, prefix) => write!(f, "{prefix}({value:?})")?,
            }
        }

        Ok(())
    }
}
