#![cfg(test)]

use rstest::rstest;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
    values.iter().copied().collect()
}

fn contents(list: &SinglyLinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_new_list_is_empty() {
    let list = SinglyLinkedList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.iter().next(), None);
}

#[test]
fn test_add_first_and_last() {
    let mut list = SinglyLinkedList::new();
    list.add_first(2);
    list.add_first(1);
    list.add_last(3);
    list.add_last(4);

    assert_eq!(contents(&list), [1, 2, 3, 4]);
    assert_eq!(list.len(), 4);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&4), "add_last should update the tail.");
    list.verify_links();
}

#[test]
fn test_add_last_after_add_first_on_empty() {
    let mut list = SinglyLinkedList::new();
    list.add_first(1);
    list.add_last(2);

    assert_eq!(
        list.back(),
        Some(&2),
        "The first node added to an empty list should be both head and tail."
    );
    list.verify_links();
}

#[test]
fn test_remove_first() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.remove_first(), Ok(1));
    assert_eq!(list.remove_first(), Ok(2));
    list.verify_links();
    assert_eq!(list.remove_first(), Ok(3));

    assert!(list.is_empty());
    assert_eq!(list.back(), None, "Removing the last node should clear the tail.");
    assert_eq!(list.remove_first(), Err(EmptyCollection));
}

#[test]
fn test_remove_last() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.remove_last(), Ok(3));
    assert_eq!(list.back(), Some(&2), "The predecessor should become the new tail.");
    list.verify_links();

    list.add_last(5);
    assert_eq!(contents(&list), [1, 2, 5], "Appending after remove_last should link correctly.");

    assert_eq!(list.remove_last(), Ok(5));
    assert_eq!(list.remove_last(), Ok(2));
    assert_eq!(list.remove_last(), Ok(1));
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.remove_last(), Err(EmptyCollection));
}

#[test]
fn test_remove_last_large_list() {
    let mut list: SinglyLinkedList<usize> = (0..50_000).collect();

    for expected in (49_990..50_000).rev() {
        assert_eq!(list.remove_last(), Ok(expected));
    }

    assert_eq!(list.len(), 49_990);
    assert_eq!(list.back(), Some(&49_989));
}

#[rstest]
#[case::head(&[1, 2, 3], 1, &[2, 3])]
#[case::middle(&[1, 2, 3], 2, &[1, 3])]
#[case::tail(&[1, 2, 3], 3, &[1, 2])]
#[case::only(&[7], 7, &[])]
#[case::first_of_duplicates(&[4, 5, 4], 4, &[5, 4])]
fn test_remove_value(#[case] initial: &[i32], #[case] value: i32, #[case] expected: &[i32]) {
    let mut list = list_of(initial);

    assert!(list.remove(&value));
    assert_eq!(contents(&list), expected);
    assert_eq!(list.len(), expected.len(), "Every removal should decrement the length.");
    assert_eq!(list.back(), expected.last());
    list.verify_links();
}

#[test]
fn test_remove_missing_value() {
    let mut list = list_of(&[1, 2, 3]);
    assert!(!list.remove(&9));
    assert_eq!(list.len(), 3);

    let mut empty = SinglyLinkedList::<i32>::new();
    assert!(!empty.remove(&1));
}

#[test]
fn test_contains_and_index_of() {
    let list = list_of(&[3, 6, 9]);
    assert!(list.contains(&6));
    assert!(!list.contains(&7));
    assert_eq!(list.index_of(&9), Some(2));
    assert_eq!(list.index_of(&1), None);
    assert!(!SinglyLinkedList::<i32>::new().contains(&0));
}

#[test]
fn test_get_at() {
    let list = list_of(&[10, 20, 30]);
    assert_eq!(list.get_at(0), Ok(&10));
    assert_eq!(list.get_at(2), Ok(&30));
    assert_eq!(list.get_at(3), Err(IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(
        SinglyLinkedList::<i32>::new().get_at(0),
        Err(IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(list[1], 20);
}

#[test]
fn test_index_out_of_range_panics() {
    assert_panics!({
        let list = list_of(&[1]);
        let _value = list[1];
    });
}

#[rstest]
#[case::front(0, &[9, 1, 2, 3])]
#[case::middle(2, &[1, 2, 9, 3])]
#[case::back(3, &[1, 2, 3, 9])]
fn test_insert_at(#[case] index: usize, #[case] expected: &[i32]) {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.insert_at(index, 9), Ok(()));
    assert_eq!(contents(&list), expected);
    assert_eq!(list.len(), 4);
    list.verify_links();
}

#[test]
fn test_insert_at_out_of_range() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.insert_at(4, 9), Err(IndexOutOfRange { index: 4, len: 3 }));
    assert_eq!(contents(&list), [1, 2, 3], "A failed insertion shouldn't change the list.");

    let mut empty = SinglyLinkedList::new();
    assert_eq!(empty.insert_at(0, 1), Ok(()), "Index 0 is valid for an empty list.");
    assert_eq!(empty.back(), Some(&1));
}

#[test]
fn test_remove_at() {
    let mut list = list_of(&[1, 2, 3, 4]);

    assert_eq!(list.remove_at(1), Ok(2));
    assert_eq!(list.remove_at(2), Ok(4));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.remove_at(2), Err(IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(list.remove_at(0), Ok(1));
    assert_eq!(contents(&list), [3]);
    list.verify_links();
}

#[test]
fn test_iter_is_restartable() {
    let list = list_of(&[1, 2, 3]);

    let first: Vec<_> = list.iter().collect();
    let second: Vec<_> = list.iter().collect();
    assert_eq!(first, second, "Repeated traversal of an unmodified list should be stable.");
    assert_eq!(list.iter().len(), 3);
}

#[test]
fn test_iter_mut() {
    let mut list = list_of(&[1, 2, 3]);
    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(contents(&list), [10, 20, 30]);
    *list.get_at_mut(1).unwrap() = 0;
    if let Some(front) = list.front_mut() {
        *front = -1;
    }
    assert_eq!(contents(&list), [-1, 0, 30]);
}

/// Mutable borrows of the last element must not invalidate the tail used by the next append. Run
/// under `cargo miri test` to check the pointer accesses themselves.
#[test]
fn test_mutate_tail_then_append() {
    let mut list = SinglyLinkedList::new();
    list.add_last(1);
    list.add_last(2);
    *list.get_at_mut(1).unwrap() = 20;
    list.add_last(3);

    if let Some(last) = list.iter_mut().last() {
        *last = 30;
    }
    list.add_last(4);

    if let Some(first) = list.front_mut() {
        *first += 10;
    }
    *list.get_at_mut(3).unwrap() = 40;
    list.add_first(0);
    list.add_last(5);

    assert_eq!(contents(&list), [0, 11, 20, 30, 40, 5]);
    assert_eq!(list.back(), Some(&5));
    list.verify_links();

    assert_eq!(list.remove_last(), Ok(5));
    *list.get_at_mut(4).unwrap() = 44;
    list.add_last(6);
    assert_eq!(list.back(), Some(&6));
    assert_eq!(contents(&list), [0, 11, 20, 30, 44, 6]);
    list.verify_links();

    let mut single = SinglyLinkedList::new();
    single.add_last(1);
    if let Some(value) = single.front_mut() {
        *value = 2;
    }
    single.add_last(3);
    assert_eq!(contents(&single), [2, 3]);
    single.verify_links();
}

#[test]
fn test_into_iter() {
    let list = list_of(&[1, 2, 3]);
    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_clear_drops_every_value() {
    let counter = CountedDrop::new(0);
    let mut list = SinglyLinkedList::new();
    for _ in 0..10 {
        list.add_last(counter.clone());
    }

    list.clear();
    assert_eq!(counter.dropped(), 10, "Clearing should release every node.");
    assert!(list.is_empty());

    list.add_last(counter.clone());
    list.add_first(counter.clone());
    drop(list);
    assert_eq!(counter.dropped(), 12, "Dropping the list should release every node.");
}

#[test]
fn test_clear_then_reuse_matches_fresh_list() {
    let mut reused = list_of(&[5, 6, 7]);
    reused.clear();

    let mut fresh = SinglyLinkedList::new();
    for list in [&mut reused, &mut fresh] {
        list.add_last(1);
        list.add_first(0);
        list.insert_at(2, 2).unwrap();
    }

    assert_eq!(reused, fresh);
    assert_eq!(reused.back(), fresh.back());
}

#[test]
fn test_drop_long_list() {
    let list: SinglyLinkedList<u32> = (0..200_000).collect();
    assert_eq!(list.len(), 200_000);
    drop(list);
}

#[test]
fn test_formatting() {
    let list = list_of(&[1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(
        format!("{list:?}"),
        "SinglyLinkedList { contents: [1, 2, 3], len: 3 }"
    );
    assert_eq!(format!("{}", SinglyLinkedList::<i32>::new()), "()");
}
