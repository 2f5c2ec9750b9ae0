use std::ptr::NonNull;

/// A link to the next node. Links never free anything themselves: the list that allocated a node
/// is responsible for releasing it with [`NodePtr::take_node`].
pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box and immediately leaked. Every later access, including the
// final free, goes through the raw pointer, never through a Box or a reference to a whole node.

/// A pointer to a heap allocated node, owned by the list that created it.
///
/// Every method besides `take_node` assumes that the node is still allocated, which holds for as
/// long as the pointer is reachable from a list, because lists only free nodes that they have
/// already unlinked.
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node, returning its contents.
    ///
    /// # Safety
    /// The node must have been unlinked from its list, and no copy of this pointer may be used
    /// afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and, per the caller, hasn't been
        // freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(self) -> &'a T {
        // SAFETY: The node is allocated (see the type's docs) and the list only hands out this
        // reference for the duration of a shared borrow of itself.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As above, but for an exclusive borrow of the list. Only the value is borrowed,
        // never the whole node, so the links stay usable through other copies of the pointer.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn next(self) -> Link<T> {
        // SAFETY: The node is allocated, and links are plain copies.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: The node is allocated, and overwriting a link doesn't free what it pointed at.
        unsafe { (*self.0.as_ptr()).next = next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub const fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }
}
