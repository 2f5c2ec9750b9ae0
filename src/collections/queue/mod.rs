//! A module containing [`Queue`], a first-in first-out collection built from two
//! [`Stack`](crate::collections::stack::Stack)s.

mod queue;

pub use queue::*;
