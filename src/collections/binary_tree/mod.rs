//! Binary tree collection types. Currently this is just [`BinarySearchTree`], an unbalanced
//! ordered set.

pub mod set;

#[doc(inline)]
pub use set::BinarySearchTree;
