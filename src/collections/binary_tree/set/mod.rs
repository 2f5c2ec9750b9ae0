//! A module containing [`BinarySearchTree`] and its traversal iterators.
//!
//! Each traversal order has its own iterator type ([`InOrder`], [`PreOrder`] and [`PostOrder`]).
//! They keep their pending nodes on a [`Stack`](crate::collections::stack::Stack) rather than
//! recursing, so a degenerate (list-shaped) tree can be traversed at any depth.

mod binary_search_tree;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
