#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_lifo_order() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.pop(), Err(EmptyCollection), "Popping an empty Stack should fail.");
}

#[test]
fn test_interleaved_push_pop() {
    let mut stack = Stack::new();
    stack.push('a');
    stack.push('b');
    assert_eq!(stack.pop(), Ok('b'));
    stack.push('c');
    assert_eq!(
        stack.pop(),
        Ok('c'),
        "The most recent unremoved push should always come out first."
    );
    assert_eq!(stack.pop(), Ok('a'));
    assert!(stack.is_empty());
}

#[test]
fn test_peek() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek(), Err(EmptyCollection));

    stack.push(5);
    stack.push(6);
    assert_eq!(stack.peek(), Ok(&6));
    assert_eq!(stack.len(), 2, "Peeking shouldn't remove anything.");

    if let Ok(top) = stack.peek_mut() {
        *top = 60;
    }
    assert_eq!(stack.pop(), Ok(60));
    assert_eq!(stack.peek(), Ok(&5));
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new(0);
    let mut stack: Stack<CountedDrop> = (0..4).map(|_| counter.clone()).collect();

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(counter.dropped(), 4);
    assert!(stack.pop().is_err());

    stack.push(counter.clone());
    assert_eq!(stack.len(), 1, "A cleared Stack should behave like a new one.");
}

#[test]
fn test_iteration_order() {
    let stack: Stack<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [3, 2, 1]);
}

#[test]
fn test_formatting() {
    let stack: Stack<i32> = [1, 2].into_iter().collect();
    assert_eq!(format!("{stack}"), "[2, 1]");
    assert_eq!(format!("{stack:?}"), "Stack { top_to_bottom: [2, 1], len: 2 }");
}
