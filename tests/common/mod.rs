#![allow(dead_code)]

use linkseq::{Deque, LinkedList, LinkedListNode};

/// Walks a chain through its public node links and panics on the first broken invariant
pub fn assert_links<T>(
    head: Option<&LinkedListNode<T>>,
    tail: Option<&LinkedListNode<T>>,
    len: usize,
) {
    let (head, tail) = match (head, tail) {
        (None, None) => {
            assert_eq!(len, 0, "empty chain reports length {len}");
            return;
        }
        (Some(head), Some(tail)) => (head, tail),
        _ => panic!("only one of head and tail is set"),
    };

    assert!(head.prev().is_none(), "head has a predecessor");
    assert!(tail.next().is_none(), "tail has a successor");

    let mut count = 1;
    let mut current = head;
    while let Some(next) = current.next() {
        let back = next.prev().expect("node is missing its back link");
        assert!(std::ptr::eq(back, current), "back link does not point to predecessor");
        count += 1;
        assert!(count <= len, "chain is longer than its length");
        current = next;
    }

    assert!(std::ptr::eq(current, tail), "forward walk does not end at the tail");
    assert_eq!(count, len);
}

pub fn assert_list<T>(list: &LinkedList<T>) {
    assert_links(list.head(), list.tail(), list.len());
}

pub fn assert_deque<T>(deque: &Deque<T>) {
    assert_links(deque.head(), deque.tail(), deque.len());
}

pub fn lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
