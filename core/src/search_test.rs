use crate::test_utils::init_test_logging;
use crate::{Sequence, seq};
use pretty_assertions::assert_eq;

#[test]
fn test_find() {
    init_test_logging();
    let s = seq![5, 12, 8, 130, 44];
    assert_eq!(s.find(|v: &i32| *v > 10), Some(&12));
    assert_eq!(s.find_index(|v: &i32| *v > 10), Some(1));
    assert_eq!(s.find(|v: &i32| *v > 1000), None);
    assert_eq!(s.find_index(|v: &i32| *v > 1000), None);
}

#[test]
fn test_find_last() {
    let s = seq![5, 12, 8, 130, 44];
    assert_eq!(s.find_last(|v: &i32| *v > 10), Some(&44));
    assert_eq!(s.find_last_index(|v: &i32| *v < 10), Some(2));
    assert_eq!(s.find_last(|_: &i32| false), None);
}

#[test]
fn test_find_last_visits_from_back_with_original_indices() {
    let s = seq![1, 2, 3];
    let mut visited = alloc::vec::Vec::new();
    let found = s.find_last_index(|v: &i32, i: usize| {
        visited.push(i);
        *v == 2
    });
    assert_eq!(found, Some(1));
    assert_eq!(visited, [2, 1]);
}

#[test]
fn test_find_with_view() {
    let s = seq![1, 4, 9];
    let found = s.find_index(|v: &i32, i: usize, view: &Sequence<i32>| {
        view.get(i + 1).is_some_and(|next| next - v > 4)
    });
    assert_eq!(found, Some(1));
}

#[test]
fn test_find_on_empty() {
    let empty: Sequence<i32> = seq![];
    assert_eq!(empty.find(|_: &i32| true), None);
    assert_eq!(empty.find_last_index(|_: &i32| true), None);
}

#[test]
fn test_value_search() {
    let s = seq!["a", "b", "a"];
    assert!(s.includes(&"b"));
    assert!(!s.includes(&"z"));
    assert_eq!(s.index_of(&"a"), Some(0));
    assert_eq!(s.last_index_of(&"a"), Some(2));
    assert_eq!(s.index_of(&"z"), None);
}

#[test]
fn test_at_counts_from_either_end() {
    let s = seq![10, 20, 30];
    assert_eq!(s.at(0), Some(&10));
    assert_eq!(s.at(2), Some(&30));
    assert_eq!(s.at(3), None);
    assert_eq!(s.at(-1), Some(&30));
    assert_eq!(s.at(-3), Some(&10));
    assert_eq!(s.at(-4), None);
    assert_eq!(s.at(isize::MIN), None);
}

#[test]
fn test_join() {
    assert_eq!(seq![1, 2, 3].join(","), "1,2,3");
    assert_eq!(seq!["a", "b"].join(" - "), "a - b");
    assert_eq!(seq![1.5].join(","), "1.5");
    assert_eq!(Sequence::<u8>::new().join(","), "");
}
