//! Behavior tests for the ordered unique sequence adapter.

use argentum::prelude::*;
use rstest::rstest;

// =============================================================================
// Construction Uniqueness
// =============================================================================

#[rstest]
fn test_construction_keeps_first_occurrence() {
    let unique = UniqueSequence::build([3, 1, 3, 2, 1]);
    assert_eq!(unique, UniqueSequence::build([3, 1, 2]));
    assert_eq!(unique.len(), 3);
}

#[rstest]
fn test_collect_deduplicates_like_build() {
    let collected: UniqueSequence<i32> = [1, 2, 2, 3].into_iter().collect();
    assert_eq!(collected, UniqueSequence::build([1, 2, 3]));
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn test_each_visits_in_insertion_order() {
    let unique = UniqueSequence::build(["c", "a", "b"]);
    let mut visited = Vec::new();
    unique.each(|element, index| visited.push((index, *element)));
    assert_eq!(visited, vec![(0, "c"), (1, "a"), (2, "b")]);
}

#[rstest]
fn test_filter_and_reject_partition_in_order() {
    let unique = UniqueSequence::build([5, 2, 9, 4]);
    assert_eq!(
        unique.filter(|element, _| element % 2 == 0),
        UniqueSequence::build([2, 4]),
    );
    assert_eq!(
        unique.reject(|element, _| element % 2 == 0),
        UniqueSequence::build([5, 9]),
    );
}

#[rstest]
fn test_find_and_find_with_index() {
    let unique = UniqueSequence::build([5, 2, 9]);
    assert_eq!(unique.find(|element, _| element % 3 == 0), Some(&9));
    assert_eq!(unique.find_with_index(|element, _| element % 2 == 0), Some((&2, 1)));
}

#[rstest]
fn test_map_collapses_colliding_results_to_first_occurrence() {
    let unique = UniqueSequence::build([1, 2, 3, 4]);
    // Parity collides: 1 and 3 both map to 1, 2 and 4 both map to 0.
    assert_eq!(
        unique.map(|element, _| element % 2),
        UniqueSequence::build([1, 0]),
    );
}

#[rstest]
fn test_quantifiers() {
    let unique = UniqueSequence::build([1, 2, 3]);
    assert!(unique.any(|element, _| *element > 2));
    assert!(!unique.all(|element, _| *element > 2));
    assert!(unique.none(|element, _| *element > 5));
}

#[rstest]
fn test_reduce_in_insertion_order() {
    let unique = UniqueSequence::build(["b", "a", "c"]);
    let joined = unique.reduce(None, |accumulator: Option<String>, element, _| {
        accumulator.map_or_else(|| (*element).to_string(), |joined| joined + *element)
    });
    assert_eq!(joined, Some("bac".to_string()));
}

// =============================================================================
// Windowing & Pairing
// =============================================================================

#[rstest]
fn test_take_drop_complement() {
    let unique = UniqueSequence::build([4, 1, 3, 2]);
    assert_eq!(unique.take(2), UniqueSequence::build([4, 1]));
    assert_eq!(unique.drop(2), UniqueSequence::build([3, 2]));
    assert_eq!(unique.take(0), UniqueSequence::new());
    assert_eq!(unique.take(9), unique);
}

#[rstest]
fn test_take_while_and_drop_while() {
    let unique = UniqueSequence::build([1, 2, 9, 3]);
    assert_eq!(
        unique.take_while(|element, _| *element < 5),
        UniqueSequence::build([1, 2]),
    );
    assert_eq!(
        unique.drop_while(|element, _| *element < 5),
        UniqueSequence::build([9, 3]),
    );
}

#[rstest]
fn test_zip_truncates_to_the_shorter_side() {
    let left = UniqueSequence::build([1, 2, 3]);
    let right = UniqueSequence::build(["a", "b"]);
    assert_eq!(
        left.zip(&right),
        UniqueSequence::build([(1, "a"), (2, "b")]),
    );
}

#[rstest]
fn test_zip_with_a_plain_sequence() {
    let left = UniqueSequence::build([1, 2]);
    let right = Sequence::from(vec!["x", "y", "z"]);
    assert_eq!(left.zip(&right), UniqueSequence::build([(1, "x"), (2, "y")]));
}

// =============================================================================
// Flatten
// =============================================================================

#[rstest]
fn test_flatten_inlines_recursively_and_deduplicates() {
    let nested = UniqueSequence::build([
        UniqueNested::Scalar(1),
        UniqueNested::from(UniqueSequence::build([
            UniqueNested::Scalar(2),
            UniqueNested::from(UniqueSequence::build([
                UniqueNested::Scalar(3),
                UniqueNested::Scalar(1),
            ])),
        ])),
    ]);
    assert_eq!(nested.flatten(), UniqueSequence::build([1, 2, 3]));
}

#[rstest]
fn test_flatten_map() {
    let nested = UniqueSequence::build([
        UniqueNested::Scalar(1),
        UniqueNested::from(UniqueSequence::build([UniqueNested::Scalar(2)])),
    ]);
    assert_eq!(
        nested.flatten_map(|element, _| element * 10),
        UniqueSequence::build([10, 20]),
    );
}

// =============================================================================
// Aggregation
// =============================================================================

#[rstest]
fn test_aggregation() {
    let unique = UniqueSequence::build([3, 1, 2]);
    assert_eq!(unique.sum(), Ok(Number::Integer(6)));
    assert_eq!(unique.product(), Ok(Number::Integer(6)));
    assert_eq!(unique.maximum(), Ok(3));
    assert_eq!(unique.minimum(), Ok(1));
}

#[rstest]
fn test_aggregation_failures() {
    let empty: UniqueSequence<i32> = UniqueSequence::new();
    assert_eq!(
        empty.maximum(),
        Err(AlgebraError::EmptyContainer { operation: "maximum" }),
    );
    assert_eq!(
        empty.minimum(),
        Err(AlgebraError::EmptyContainer { operation: "minimum" }),
    );

    let nested = UniqueSequence::build([UniqueNested::from(UniqueSequence::build([
        UniqueNested::Scalar(1),
    ]))]);
    assert!(nested.sum().is_err());
}

// =============================================================================
// Immutability
// =============================================================================

#[rstest]
fn test_operations_never_mutate_the_receiver() {
    let unique = UniqueSequence::build([3, 1, 2]);
    let snapshot = unique.clone();

    let _ = unique.map(|element, _| element * 2);
    let _ = unique.filter(|_, _| false);
    let _ = unique.take(1);
    let _ = unique.drop_while(|_, _| true);
    let _ = unique.zip(&snapshot);
    let _ = unique.sum();

    assert_eq!(unique, snapshot);
}
