//! Tests for elementwise traversals and folds

use crate::test_utils::init_test_logging;
use crate::{Sequence, seq};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use pretty_assertions::assert_eq;

// ============================================================================
// map
// ============================================================================

#[test]
fn test_map_each_shape() {
    init_test_logging();
    let s = seq![10, 20, 30];

    assert_eq!(s.map(|v: &i32| v * 2), [20, 40, 60]);
    assert_eq!(
        s.map(|v: &i32, i: usize| v + i32::try_from(i).unwrap()),
        [10, 21, 32]
    );
    assert_eq!(
        s.map(|v: &i32, i: usize, _: &Sequence<i32>| v + i32::try_from(i).unwrap()),
        [10, 21, 32]
    );
}

#[test]
fn test_map_changes_element_type() {
    let s = seq![1, 22, 333];
    let lengths = s.map(|v: &i32| v.to_string().len());
    assert_eq!(lengths, [1, 2, 3]);
    let labels = s.map(|v: &i32, i: usize| alloc::format!("{i}:{v}"));
    assert_eq!(labels, ["0:1", "1:22", "2:333"]);
}

#[test]
fn test_map_fn_item() {
    fn negate(value: &i64) -> i64 {
        -value
    }
    assert_eq!(seq![1i64, -2].map(negate), [-1, 2]);
}

#[test]
fn test_map_view_is_original_sequence() {
    let s = seq![1, 2, 3];
    let totals = s.map(|_: &i32, _: usize, view: &Sequence<i32>| view.iter().sum::<i32>());
    assert_eq!(totals, [6, 6, 6]);
    let next = s.map(|v: &i32, i: usize, view: &Sequence<i32>| view.get(i + 1).map(|n| n - v));
    assert_eq!(next, [Some(1), Some(1), None]);
}

#[test]
fn test_map_empty() {
    let s: Sequence<i32> = seq![];
    let mut calls = 0;
    let mapped = s.map(|v: &i32| {
        calls += 1;
        *v
    });
    assert!(mapped.is_empty());
    assert_eq!(calls, 0);
}

#[test]
fn test_map_result_is_independent() {
    let s = seq![1, 2, 3];
    let mut mapped = s.map(|v: &i32| *v);
    mapped[0] = 100;
    assert_eq!(s, [1, 2, 3]);
    assert_ne!(s.as_slice().as_ptr(), mapped.as_slice().as_ptr());
}

// ============================================================================
// flat_map / for_each
// ============================================================================

#[test]
fn test_flat_map() {
    let s = seq![1, 2, 3];
    let repeated = s.flat_map(|v: &i32, i: usize| core::iter::repeat_n(*v, i));
    assert_eq!(repeated, [2, 3, 3]);
    let none: Sequence<i32> = s.flat_map(|_: &i32| None);
    assert!(none.is_empty());
}

#[test]
fn test_for_each_visits_in_order() {
    let s = seq!['a', 'b', 'c'];
    let mut seen = Vec::new();
    s.for_each(|v: &char, i: usize| seen.push((i, *v)));
    assert_eq!(seen, [(0, 'a'), (1, 'b'), (2, 'c')]);
}

#[test]
fn test_for_each_ignores_result() {
    let s = seq![1, 2];
    let mut total = 0;
    s.for_each(|v: &i32| {
        total += v;
        total
    });
    assert_eq!(total, 3);
}

// ============================================================================
// filter / every / some
// ============================================================================

#[test]
fn test_filter_keeps_relative_order() {
    let s = seq![3, 1, 2];
    assert_eq!(s.filter(|v: &i32| *v > 1), [3, 2]);
    assert_eq!(s.filter(|_: &i32, i: usize| i % 2 == 0), [3, 2]);
    assert_eq!(
        s.filter(|v: &i32, _: usize, view: &Sequence<i32>| Some(v) != view.first()),
        [1, 2]
    );
}

#[test]
fn test_filter_empty_and_none_kept() {
    let empty: Sequence<i32> = seq![];
    assert!(empty.filter(|_: &i32| true).is_empty());
    assert!(seq![1, 2].filter(|_: &i32| false).is_empty());
}

#[test]
fn test_filter_clones_elements() {
    let s = seq![String::from("keep"), String::from("drop")];
    let kept = s.filter(|v: &String| v.starts_with('k'));
    assert_eq!(kept, [String::from("keep")]);
    assert_eq!(s.len(), 2);
}

#[test]
fn test_every() {
    let s = seq![2, 4, 6];
    assert!(s.every(|v: &i32| v % 2 == 0));
    assert!(!s.every(|v: &i32| *v < 6));
    assert!(s.every(|v: &i32, i: usize| usize::try_from(*v).unwrap() == 2 * (i + 1)));
}

#[test]
fn test_every_short_circuits() {
    init_test_logging();
    let s = seq![1, 2, 3, 4];
    let mut visited = Vec::new();
    assert!(!s.every(|v: &i32, i: usize| {
        visited.push(i);
        *v < 2
    }));
    assert_eq!(visited, [0, 1]);
}

#[test]
fn test_some() {
    let s = seq![1, 3, 4];
    assert!(s.some(|v: &i32| v % 2 == 0));
    assert!(!s.some(|v: &i32| *v > 4));
    assert!(s.some(|_: &i32, i: usize, view: &Sequence<i32>| i + 1 == view.len()));
}

#[test]
fn test_some_short_circuits() {
    let s = seq![1, 2, 3, 4];
    let mut visited = Vec::new();
    assert!(s.some(|v: &i32, i: usize| {
        visited.push(i);
        *v == 2
    }));
    assert_eq!(visited, [0, 1]);
}

#[test]
fn test_every_and_some_on_empty() {
    let empty: Sequence<i32> = seq![];
    assert!(empty.every(|_: &i32| false));
    assert!(!empty.some(|_: &i32| true));
}

// ============================================================================
// reduce / reduce_right
// ============================================================================

#[test]
fn test_reduce_sum() {
    let s = seq![3, 1, 2];
    assert_eq!(s.reduce(|acc: i32, v: &i32| acc + v, 0), 6);
    assert_eq!(s.reduce_right(|acc: i32, v: &i32| acc + v, 0), 6);
}

#[test]
fn test_reduce_on_empty_returns_initial() {
    let empty: Sequence<i32> = seq![];
    assert_eq!(empty.reduce(|acc: i32, v: &i32| acc * v, 100), 100);
    assert_eq!(empty.reduce_right(|acc: i32, v: &i32| acc * v, 100), 100);
}

#[test]
fn test_reduce_direction() {
    let s = seq!["a", "b", "c"];
    let concat = |acc: String, v: &&str| acc + *v;
    assert_eq!(s.reduce(concat, String::new()), "abc");
    assert_eq!(s.reduce_right(concat, String::new()), "cba");
}

#[test]
fn test_reduce_right_passes_original_indices() {
    let s = seq![10, 20, 30];
    let mut indices = Vec::new();
    let total = s.reduce_right(
        |acc: usize, _: &i32, i: usize| {
            indices.push(i);
            acc + i
        },
        0,
    );
    assert_eq!(indices, [2, 1, 0]);
    assert_eq!(total, 3);
}

#[test]
fn test_reduce_with_view() {
    let s = seq![1.0, 2.0, 3.0];
    let mean = s.reduce(
        |acc: f64, v: &f64, _: usize, view: &Sequence<f64>| acc + v / view.len() as f64,
        0.0,
    );
    assert!((mean - 2.0).abs() < 1e-12);
}

#[test]
fn test_reduce_accumulator_type_differs_from_element() {
    let s = seq!["one", "three"];
    let lengths = s.reduce(
        |mut acc: Vec<usize>, v: &&str| {
            acc.push(v.len());
            acc
        },
        Vec::new(),
    );
    assert_eq!(lengths, [3, 5]);
}
