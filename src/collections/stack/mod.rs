//! A module containing [`Stack`], a last-in first-out adapter over
//! [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList).

mod iter;
mod stack;
mod tests;

pub use iter::*;
pub use stack::*;
