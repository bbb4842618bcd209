mod common;

use common::assert_deque;
use linkseq::{Deque, Error, Value};

#[test]
fn test_new() {
    let deque: Deque = Deque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.front(), None);
    assert_eq!(deque.back(), None);
    assert_eq!(deque.render(), "[]");
}

#[test]
fn test_append_and_appendleft() {
    let mut deque: Deque = Deque::new();
    deque.append("b");
    deque.appendleft("a");
    deque.append("c");

    assert_eq!(deque.len(), 3);
    assert_eq!(deque.render(), "['a', 'b', 'c']");
    assert_eq!(deque.front(), Some(&Value::from("a")));
    assert_eq!(deque.back(), Some(&Value::from("c")));
    assert_deque(&deque);
}

#[test]
fn test_appendleft_then_popleft_preserves_order() {
    let values = [3i64, 1, 4, 1, 5, 9, 2, 6];

    let mut deque: Deque<i64> = Deque::new();
    for v in values {
        deque.appendleft(v);
    }

    let mut drained = Vec::new();
    while !deque.is_empty() {
        drained.push(deque.popleft().unwrap());
        assert_deque(&deque);
    }

    drained.reverse();
    assert_eq!(drained, values);
}

#[test]
fn test_append_then_pop_reverses() {
    let values = ["x", "y", "z"];

    let mut deque: Deque = Deque::new();
    for v in values {
        deque.append(v);
    }

    let mut drained = Vec::new();
    while let Ok(v) = deque.pop() {
        drained.push(v);
        assert_deque(&deque);
    }

    assert_eq!(drained, vec!["z", "y", "x"]);
}

#[test]
fn test_pop_resets_tail_link() {
    let mut deque: Deque<i64> = (1..=3).collect();

    assert_eq!(deque.pop().unwrap(), 3);
    assert!(deque.tail().unwrap().next().is_none());
    assert_eq!(deque.back(), Some(&2));
}

#[test]
fn test_popleft_resets_head_link() {
    let mut deque: Deque<i64> = (1..=3).collect();

    assert_eq!(deque.popleft().unwrap(), 1);
    assert!(deque.head().unwrap().prev().is_none());
    assert_eq!(deque.front(), Some(&2));
}

#[test]
fn test_pop_last_node_empties_deque() {
    let mut deque: Deque = Deque::new();
    deque.append(1.5);

    assert_eq!(deque.pop().unwrap(), Value::Float(1.5));
    assert!(deque.head().is_none());
    assert!(deque.tail().is_none());

    deque.appendleft(2.5);
    assert_eq!(deque.popleft().unwrap(), Value::Float(2.5));
    assert_deque(&deque);
}

#[test]
fn test_pop_empty() {
    let mut deque: Deque = Deque::new();
    assert!(matches!(deque.pop(), Err(Error::EmptyDeque)));
    assert!(matches!(deque.popleft(), Err(Error::EmptyDeque)));
    assert_eq!(deque.len(), 0);
}

#[test]
fn test_into_iter_drains_from_head() {
    let mut deque: Deque<i64> = Deque::new();
    deque.appendleft(2);
    deque.appendleft(1);
    deque.append(3);

    let vec: Vec<i64> = deque.into_iter().collect();
    assert_eq!(vec, vec![1, 2, 3]);
}
