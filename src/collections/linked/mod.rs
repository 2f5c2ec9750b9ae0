//! Linked collection types. Currently this is just [`SinglyLinkedList`], which also backs
//! [`Stack`](crate::collections::stack::Stack) and the buckets of
//! [`HashMap`](crate::collections::hash::HashMap).

pub mod list;

#[doc(inline)]
pub use list::SinglyLinkedList;
