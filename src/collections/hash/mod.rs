//! Hash-based collection types. Currently this is just [`HashMap`], which chains colliding entries
//! in [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList) buckets.

pub mod map;

#[doc(inline)]
pub use map::HashMap;
