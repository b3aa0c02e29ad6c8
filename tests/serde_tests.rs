#![cfg(feature = "serde")]
//! Serde round-trip tests for the container adapters.

use argentum::prelude::*;
use rstest::rstest;

#[rstest]
fn test_sequence_round_trip() {
    let sequence = Sequence::from(vec![1, 2, 2, 3]);
    let json = serde_json::to_string(&sequence).unwrap();
    assert_eq!(json, "[1,2,2,3]");

    let restored: Sequence<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, sequence);
}

#[rstest]
fn test_unique_sequence_round_trip_preserves_order() {
    let unique = UniqueSequence::build([3, 1, 2]);
    let json = serde_json::to_string(&unique).unwrap();
    assert_eq!(json, "[3,1,2]");

    let restored: UniqueSequence<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, unique);
}

#[rstest]
fn test_unique_sequence_deserialization_deduplicates() {
    let restored: UniqueSequence<i32> = serde_json::from_str("[1,2,1,3,2]").unwrap();
    assert_eq!(restored, UniqueSequence::build([1, 2, 3]));
}

#[rstest]
fn test_unique_set_round_trip() {
    let set = UniqueSet::build([1, 2, 3]);
    let json = serde_json::to_string(&set).unwrap();

    let restored: UniqueSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, set);
}

#[rstest]
fn test_mapping_round_trip() {
    let mapping = Mapping::from_pairs([("a".to_string(), 1), ("b".to_string(), 2)]);
    let json = serde_json::to_string(&mapping).unwrap();

    let restored: Mapping<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, mapping);
}

#[rstest]
fn test_deserialized_containers_feed_the_algebra() {
    let sequence: Sequence<i32> = serde_json::from_str("[4,1,3]").unwrap();
    assert_eq!(sequence.maximum(), Ok(4));
    assert_eq!(sequence.sum(), Ok(Number::Integer(8)));
}
