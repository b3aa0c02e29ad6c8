//! Behavior tests for the unordered unique set adapter.
//!
//! Enumeration order is unspecified for sets, so these tests only ever
//! assert set equality, membership, and sizes — never positions.

use argentum::prelude::*;
use rstest::rstest;
use std::collections::HashSet;

// =============================================================================
// Construction Uniqueness
// =============================================================================

#[rstest]
fn test_construction_deduplicates() {
    let set = UniqueSet::build([1, 2, 2, 3, 1]);
    assert_eq!(set.len(), 3);
    assert!(set.contains(&1));
    assert!(set.contains(&2));
    assert!(set.contains(&3));
}

#[rstest]
fn test_from_hash_set() {
    let backing: HashSet<i32> = [1, 2, 3].into_iter().collect();
    let set = UniqueSet::from(backing);
    assert_eq!(set, UniqueSet::build([3, 2, 1]));
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn test_each_visits_every_element_once() {
    let set = UniqueSet::build([1, 2, 3]);
    let mut visited = Vec::new();
    set.each(|element, _| visited.push(*element));
    visited.sort_unstable();
    assert_eq!(visited, vec![1, 2, 3]);
}

#[rstest]
fn test_each_indices_cover_the_visit_positions() {
    let set = UniqueSet::build(["a", "b", "c"]);
    let mut indices = Vec::new();
    set.each(|_, index| indices.push(index));
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[rstest]
fn test_filter_and_reject_partition_as_sets() {
    let set = UniqueSet::build([1, 2, 3, 4, 5]);
    let even = set.filter(|element, _| element % 2 == 0);
    let odd = set.reject(|element, _| element % 2 == 0);

    assert_eq!(even, UniqueSet::build([2, 4]));
    assert_eq!(odd, UniqueSet::build([1, 3, 5]));
}

#[rstest]
fn test_find_returns_some_matching_element() {
    let set = UniqueSet::build([1, 2, 3]);
    let found = set.find(|element, _| element % 2 == 0);
    assert_eq!(found, Some(&2));
    assert_eq!(set.find(|element, _| *element > 9), None);
}

#[rstest]
fn test_map_rewraps_as_a_set() {
    let set = UniqueSet::build([1, 2, 3]);
    assert_eq!(set.map(|element, _| element * 2), UniqueSet::build([2, 4, 6]));
}

#[rstest]
fn test_map_collapses_colliding_results() {
    let set = UniqueSet::build([1, 2, 3, 4]);
    let parities = set.map(|element, _| element % 2);
    assert_eq!(parities, UniqueSet::build([0, 1]));
}

#[rstest]
fn test_quantifiers() {
    let set = UniqueSet::build([1, 2, 3]);
    assert!(set.any(|element, _| *element > 2));
    assert!(!set.all(|element, _| *element > 2));
    assert!(set.none(|element, _| *element > 5));

    let empty: UniqueSet<i32> = UniqueSet::new();
    assert!(!empty.any(|_, _| true));
    assert!(empty.all(|_, _| false));
}

#[rstest]
fn test_reduce_accumulates_every_element() {
    let set = UniqueSet::build([1, 2, 3]);
    let total = set.reduce(Some(0), |accumulator, element, _| {
        accumulator.unwrap_or(0) + element
    });
    assert_eq!(total, Some(6));

    let integer_total = set.reduce_integer(0, |accumulator, element, _| {
        accumulator + i64::from(*element)
    });
    assert_eq!(integer_total, 6);
}

// =============================================================================
// Flatten
// =============================================================================

#[rstest]
fn test_flatten_unions_recursively() {
    let nested = UniqueSet::build([
        SetNested::Scalar(1),
        SetNested::from(UniqueSet::build([
            SetNested::Scalar(2),
            SetNested::from(UniqueSet::build([SetNested::Scalar(3), SetNested::Scalar(1)])),
        ])),
    ]);
    assert_eq!(nested.flatten(), UniqueSet::build([1, 2, 3]));
}

#[rstest]
fn test_flatten_map() {
    let nested = UniqueSet::build([
        SetNested::Scalar(1),
        SetNested::from(UniqueSet::build([SetNested::Scalar(2)])),
    ]);
    assert_eq!(
        nested.flatten_map(|element, _| element + 10),
        UniqueSet::build([11, 12]),
    );
}

#[rstest]
fn test_equal_nested_sets_collapse() {
    // {1, 2} appearing twice as a nested element is a single set element.
    let inner = UniqueSet::build([SetNested::Scalar(1), SetNested::Scalar(2)]);
    let nested = UniqueSet::build([
        SetNested::from(inner.clone()),
        SetNested::from(inner),
    ]);
    assert_eq!(nested.len(), 1);
    assert_eq!(nested.flatten(), UniqueSet::build([1, 2]));
}

// =============================================================================
// Aggregation
// =============================================================================

#[rstest]
fn test_aggregation() {
    let set = UniqueSet::build([3, 1, 2]);
    assert_eq!(set.sum(), Ok(Number::Integer(6)));
    assert_eq!(set.product(), Ok(Number::Integer(6)));
    assert_eq!(set.maximum(), Ok(3));
    assert_eq!(set.minimum(), Ok(1));
}

#[rstest]
fn test_empty_set_aggregation_failures() {
    let empty: UniqueSet<i32> = UniqueSet::new();
    assert_eq!(
        empty.maximum(),
        Err(AlgebraError::EmptyContainer { operation: "maximum" }),
    );
    assert_eq!(
        empty.minimum(),
        Err(AlgebraError::EmptyContainer { operation: "minimum" }),
    );
}

#[rstest]
fn test_sum_fails_on_a_still_nested_element() {
    let nested = UniqueSet::build([SetNested::from(UniqueSet::build([SetNested::Scalar(1)]))]);
    assert_eq!(
        nested.sum(),
        Err(AlgebraError::TypeMismatch {
            operation: "sum",
            expected: "a numeric-coercible element",
        }),
    );
}

// =============================================================================
// Immutability
// =============================================================================

#[rstest]
fn test_operations_never_mutate_the_receiver() {
    let set = UniqueSet::build([3, 1, 2]);
    let snapshot = set.clone();

    let _ = set.map(|element, _| element * 2);
    let _ = set.filter(|_, _| false);
    let _ = set.reject(|_, _| true);
    let _ = set.sum();
    let _ = set.minimum();

    assert_eq!(set, snapshot);
}
