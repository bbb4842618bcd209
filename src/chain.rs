use std::marker::PhantomData;
use std::ptr;

use crate::node::LinkedListNode;

/// The node chain shared by `LinkedList` and `Deque`
///
/// Owns every node reachable from `head` by `next`. All relinking goes through here,
/// and every method leaves the chain consistent when it returns.
pub(crate) struct Chain<T> {
    head: *mut LinkedListNode<T>,
    tail: *mut LinkedListNode<T>,
    length: usize,
    _marker: PhantomData<Box<LinkedListNode<T>>>,
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        Chain {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            length: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.length
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub(crate) fn head(&self) -> Option<&LinkedListNode<T>> {
        unsafe { self.head.as_ref() }
    }

    pub(crate) fn tail(&self) -> Option<&LinkedListNode<T>> {
        unsafe { self.tail.as_ref() }
    }

    /// Attaches a new node before the current head
    pub(crate) fn push_front(&mut self, value: T) {
        let new_node = Box::into_raw(LinkedListNode::new(value));

        unsafe {
            if self.head.is_null() {
                self.tail = new_node;
            } else {
                (*self.head).prev = new_node;
                (*new_node).next = self.head;
            }
            self.head = new_node;
        }

        self.length += 1;
    }

    /// Attaches a new node after the current tail
    pub(crate) fn push_back(&mut self, value: T) {
        let new_node = Box::into_raw(LinkedListNode::new(value));

        unsafe {
            if self.tail.is_null() {
                self.head = new_node;
            } else {
                (*self.tail).next = new_node;
                (*new_node).prev = self.tail;
            }
            self.tail = new_node;
        }

        self.length += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        Some(self.unlink(self.head))
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_null() {
            return None;
        }
        Some(self.unlink(self.tail))
    }

    /// Splices a new node in so that it becomes the node at `index`
    /// `index` must be in `0..=len`
    pub(crate) fn insert_at(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.length);

        if index == 0 {
            return self.push_front(value);
        }
        if index == self.length {
            return self.push_back(value);
        }

        let before = self.node_at(index - 1);
        let new_node = Box::into_raw(LinkedListNode::new(value));

        unsafe {
            let after = (*before).next;
            (*new_node).prev = before;
            (*new_node).next = after;
            (*before).next = new_node;
            (*after).prev = new_node;
        }

        self.length += 1;
    }

    /// Returns the node at `index`, walking from whichever end is closer
    /// `index` must be in `0..len`
    pub(crate) fn node_at(&self, index: usize) -> *mut LinkedListNode<T> {
        debug_assert!(index < self.length);

        unsafe {
            if index <= self.length / 2 {
                let mut current = self.head;
                for _ in 0..index {
                    current = (*current).next;
                }
                current
            } else {
                let mut current = self.tail;
                for _ in index + 1..self.length {
                    current = (*current).prev;
                }
                current
            }
        }
    }

    /// Returns the first node, from the head, whose value satisfies `pred`
    pub(crate) fn position<F>(&self, mut pred: F) -> Option<*mut LinkedListNode<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.head;
        while !current.is_null() {
            unsafe {
                if pred((*current).value()) {
                    return Some(current);
                }
                current = (*current).next;
            }
        }
        None
    }

    /// Detaches `node_ptr` from the chain and releases it
    /// `node_ptr` must be a node of this chain
    pub(crate) fn unlink(&mut self, node_ptr: *mut LinkedListNode<T>) -> T {
        debug_assert!(!node_ptr.is_null() && self.length > 0);

        unsafe {
            let prev = (*node_ptr).prev;
            let next = (*node_ptr).next;

            if prev.is_null() {
                self.head = next;
            } else {
                (*prev).next = next;
            }

            if next.is_null() {
                self.tail = prev;
            } else {
                (*next).prev = prev;
            }

            self.length -= 1;
            Box::from_raw(node_ptr).into_value()
        }
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            remaining: self.length,
            _marker: PhantomData,
        }
    }

    /// Checks head/tail, length and both link directions against each other
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        if self.length == 0 {
            return self.head.is_null() && self.tail.is_null();
        }
        if self.head.is_null() || self.tail.is_null() {
            return false;
        }

        unsafe {
            if !(*self.head).prev.is_null() || !(*self.tail).next.is_null() {
                return false;
            }

            let mut count = 0;
            let mut prev = ptr::null_mut();
            let mut current = self.head;
            while !current.is_null() {
                if (*current).prev != prev || count > self.length {
                    return false;
                }
                count += 1;
                prev = current;
                current = (*current).next;
            }
            count == self.length && prev == self.tail
        }
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

/// A borrowing iterator over the values of a chain, head to tail
pub struct Iter<'a, T> {
    current: *mut LinkedListNode<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }

        unsafe {
            let value = (*self.current).value();
            self.current = (*self.current).next;
            self.remaining -= 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A consuming iterator that drains a chain from the head
pub struct IntoIter<T>(pub(crate) Chain<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
