//! This crate is a small library of classic, in-memory collection types: the kind that are
//! usually written once while learning how data structures work.
//!
//! # Purpose
//! Each collection is written out in full rather than wrapping the standard library, so that the
//! pointer rewiring, traversal orders and collision handling are all visible in the source. They
//! can be used directly, but the standard library's collections will almost always be faster.
//!
//! # Collections
//! - [`SinglyLinkedList`](collections::linked::SinglyLinkedList): a head-to-tail chain of nodes,
//!   with O(1) access to both ends for insertion.
//! - [`Stack`](collections::stack::Stack): last-in first-out, over a SinglyLinkedList.
//! - [`Queue`](collections::queue::Queue): first-in first-out, built from two Stacks with
//!   amortized O(1) transfer between them.
//! - [`BinarySearchTree`](collections::binary_tree::BinarySearchTree): an unbalanced ordered set
//!   with in-, pre- and post-order traversal.
//! - [`HashMap`](collections::hash::HashMap): a fixed number of buckets, each chaining its entries
//!   in a SinglyLinkedList.
//!
//! # Error Handling
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). A failed operation always leaves the collection unchanged.
//!
//! Indexing a list with `list[i]` panics instead, in the same way that indexing a slice does.
//!
//! # Dependencies
//! This crate only depends on some derive macros, because they're helpful and remove the need for
//! some very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[cfg(feature = "binary_tree")]
#[doc(inline)]
pub use collections::binary_tree::BinarySearchTree;
#[cfg(feature = "hash")]
#[doc(inline)]
pub use collections::hash::HashMap;
#[cfg(feature = "linked")]
#[doc(inline)]
pub use collections::linked::SinglyLinkedList;
#[cfg(feature = "queue")]
#[doc(inline)]
pub use collections::queue::Queue;
#[cfg(feature = "stack")]
#[doc(inline)]
pub use collections::stack::Stack;
#[doc(inline)]
pub use collections::CollectionError;
