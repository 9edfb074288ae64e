use alloc::boxed::Box;
use core::fmt;

/// An owning link to the next node in the chain.
pub(super) type Link<T> = Option<Box<Node<T>>>;

/// A node in a singly linked list.
///
/// Nodes are only created and destroyed by the owning
/// [`LinkedList`](super::LinkedList); callers may read the chain and mutate
/// values, but never relink it.
pub struct Node<T> {
    pub(super) value: T,
    pub(super) next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    pub(super) fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { value, next })
    }

    /// Get the value stored in the node
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the value stored in the node
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Get the successor of this node, `None` for the tail
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Whether this node is the last one in its list.
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("is_tail", &self.is_tail())
            .finish()
    }
}
