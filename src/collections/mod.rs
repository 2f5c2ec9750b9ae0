//! Classic general-purpose collection types.
//!
//! # Purpose
//! Each collection here is a textbook structure written out in full: a singly linked list, a
//! stack and a two-stack queue layered on top of it, an unbalanced binary search tree and a hash
//! map with separate chaining. None of them rebalance or resize themselves.
//!
//! # Features
//! Every collection sits behind a feature of the same name, all enabled by `collections-all`
//! (the default). Features pull in the collections they're built on, e.g. `queue` enables
//! `stack`, which enables `linked`.
//!
//! # Errors
//! Fallible operations return a specific error struct, such as
//! [`EmptyCollection`]. [`CollectionError`] unions all of
//! them, for callers that use several collections in one function.

mod error;

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;

pub use error::*;
