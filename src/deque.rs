use std::fmt;

use crate::chain::{Chain, IntoIter, Iter};
use crate::error::{Error, Result};
use crate::node::LinkedListNode;
use crate::render::{Repr, write_seq};
use crate::value::Value;

/// A double-ended queue mutated only at its ends
///
/// Shares the node chain of `LinkedList`, but offers no positional insert and no
/// value-based removal. Use the end operations instead:
///
/// ```compile_fail
/// let mut deque: linkseq::Deque = linkseq::Deque::new();
/// deque.insert(0, 1i64);
/// ```
///
/// ```compile_fail
/// let mut deque: linkseq::Deque = linkseq::Deque::new();
/// deque.remove(&linkseq::Value::Int(1));
/// ```
pub struct Deque<T = Value> {
    chain: Chain<T>,
}

impl<T> Deque<T> {
    /// Creates a new empty deque
    pub fn new() -> Self {
        Deque {
            chain: Chain::new(),
        }
    }

    /// Returns the number of values in the deque
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns true if the deque is empty
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Adds `value` at the tail
    pub fn append(&mut self, value: impl Into<T>) {
        self.chain.push_back(value.into());
    }

    /// Adds `value` at the head
    pub fn appendleft(&mut self, value: impl Into<T>) {
        self.chain.push_front(value.into());
    }

    /// Removes and returns the value at the tail
    pub fn pop(&mut self) -> Result<T> {
        self.chain.pop_back().ok_or(Error::EmptyDeque)
    }

    /// Removes and returns the value at the head
    pub fn popleft(&mut self) -> Result<T> {
        self.chain.pop_front().ok_or(Error::EmptyDeque)
    }

    /// Returns the first node, if any
    pub fn head(&self) -> Option<&LinkedListNode<T>> {
        self.chain.head()
    }

    /// Returns the last node, if any
    pub fn tail(&self) -> Option<&LinkedListNode<T>> {
        self.chain.tail()
    }

    /// Returns the value at the head without removing it
    pub fn front(&self) -> Option<&T> {
        self.chain.head().map(|node| node.value())
    }

    /// Returns the value at the tail without removing it
    pub fn back(&self) -> Option<&T> {
        self.chain.tail().map(|node| node.value())
    }

    /// Returns an iterator over the values, head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: Repr> Deque<T> {
    /// Renders the values head to tail, e.g. `['a', 'b']`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Repr> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, V: Into<T>> Extend<V> for Deque<T> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T, V: Into<T>> FromIterator<V> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_operations_keep_links_consistent() {
        let mut deque: Deque<i64> = Deque::new();
        deque.append(2);
        deque.appendleft(1);
        deque.append(3);
        deque.appendleft(0);
        assert!(deque.chain.is_consistent());

        assert_eq!(deque.pop().unwrap(), 3);
        assert!(deque.chain.is_consistent());
        assert_eq!(deque.popleft().unwrap(), 0);
        assert!(deque.chain.is_consistent());
        assert_eq!(deque.popleft().unwrap(), 1);
        assert_eq!(deque.pop().unwrap(), 2);
        assert!(deque.chain.is_consistent());
    }

    #[test]
    fn test_pop_empty_leaves_deque_usable() {
        let mut deque: Deque<i64> = Deque::new();
        assert!(matches!(deque.pop(), Err(Error::EmptyDeque)));
        assert!(matches!(deque.popleft(), Err(Error::EmptyDeque)));

        deque.append(7);
        assert!(deque.chain.is_consistent());
        assert_eq!(deque.popleft().unwrap(), 7);
    }
}
