use std::fmt;

use crate::chain::{Chain, IntoIter, Iter};
use crate::error::{Error, Result};
use crate::node::LinkedListNode;
use crate::render::{Repr, write_seq};
use crate::value::Value;

/// A doubly linked list with indexed and value-based access
///
/// Every mutating operation either succeeds completely or fails before
/// any link is touched.
pub struct LinkedList<T = Value> {
    chain: Chain<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list
    pub fn new() -> Self {
        LinkedList {
            chain: Chain::new(),
        }
    }

    /// Returns the number of nodes in the list
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Same as `len`
    pub fn length(&self) -> usize {
        self.chain.len()
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns the first node, if any
    pub fn head(&self) -> Option<&LinkedListNode<T>> {
        self.chain.head()
    }

    /// Returns the last node, if any
    pub fn tail(&self) -> Option<&LinkedListNode<T>> {
        self.chain.tail()
    }

    /// Appends a new node holding `value` after the tail
    pub fn append(&mut self, value: impl Into<T>) {
        self.chain.push_back(value.into());
    }

    /// Returns the node at zero-based position `index`
    pub fn get(&self, index: usize) -> Result<&LinkedListNode<T>> {
        if index >= self.chain.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.chain.len(),
            });
        }
        Ok(unsafe { &*self.chain.node_at(index) })
    }

    /// Inserts a new node so that it becomes the node at `index`
    /// Subsequent nodes shift back by one. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: impl Into<T>) -> Result<()> {
        if index > self.chain.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.chain.len(),
            });
        }
        self.chain.insert_at(index, value.into());
        Ok(())
    }

    /// Returns an iterator over the values, head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the first node, from the head, holding `value`
    pub fn find<V>(&self, value: &V) -> Result<&LinkedListNode<T>>
    where
        T: PartialEq<V>,
        V: ?Sized,
    {
        if self.chain.is_empty() {
            return Err(Error::EmptyList);
        }
        match self.chain.position(|v| v == value) {
            Some(node_ptr) => Ok(unsafe { &*node_ptr }),
            None => Err(Error::NotFound),
        }
    }

    /// Removes the first node holding `value` and returns its value
    /// Later nodes holding an equal value are left in place.
    pub fn remove<V>(&mut self, value: &V) -> Result<T>
    where
        T: PartialEq<V>,
        V: ?Sized,
    {
        if self.chain.is_empty() {
            return Err(Error::EmptyList);
        }
        let node_ptr = self.chain.position(|v| v == value).ok_or(Error::NotFound)?;
        Ok(self.chain.unlink(node_ptr))
    }

    /// Returns true if any node holds `value`
    pub fn contains<V>(&self, value: &V) -> bool
    where
        T: PartialEq<V>,
        V: ?Sized,
    {
        self.chain.position(|v| v == value).is_some()
    }
}

impl<T: Repr> LinkedList<T> {
    /// Renders the values in list order, e.g. `[1, 3, 5]` or `['a', 'b', 'c']`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Repr> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, V: Into<T>> Extend<V> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T, V: Into<T>> FromIterator<V> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}
