use std::ptr;

/// The smallest unit of storage: one value
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    value: T,
}

impl<T> Node<T> {
    /// Creates a node holding `value`
    pub fn new(value: T) -> Self {
        Node { value }
    }

    /// Returns the stored value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the node and returns its value
    pub fn into_value(self) -> T {
        self.value
    }
}

/// A node linked into a chain
///
/// `next` is owned by the chain the node belongs to. `prev` is a non-owning
/// back-pointer, only used for traversal and relinking.
pub struct LinkedListNode<T> {
    node: Node<T>,
    pub(crate) next: *mut LinkedListNode<T>,
    pub(crate) prev: *mut LinkedListNode<T>,
}

impl<T> LinkedListNode<T> {
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(LinkedListNode {
            node: Node::new(value),
            next: ptr::null_mut(),
            prev: ptr::null_mut(),
        })
    }

    /// Returns the stored value
    pub fn value(&self) -> &T {
        self.node.value()
    }

    /// Returns the unlinked value holder
    pub fn node(&self) -> &Node<T> {
        &self.node
    }

    /// Returns the following node, or None at the tail
    pub fn next(&self) -> Option<&LinkedListNode<T>> {
        // Nodes reachable from a borrowed node live at least as long as the borrow of their chain
        unsafe { self.next.as_ref() }
    }

    /// Returns the preceding node, or None at the head
    pub fn prev(&self) -> Option<&LinkedListNode<T>> {
        unsafe { self.prev.as_ref() }
    }

    pub(crate) fn into_value(self: Box<Self>) -> T {
        self.node.into_value()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedListNode<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedListNode")
            .field("value", self.value())
            .field("has_prev", &!self.prev.is_null())
            .field("has_next", &!self.next.is_null())
            .finish()
    }
}
