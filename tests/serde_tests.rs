//! Serde round-trip tests for the immutable containers.

#![cfg(feature = "serde")]

use richly::container::{ImmutableList, ImmutableVector};
use rstest::rstest;

#[rstest]
fn test_list_serializes_as_sequence() {
    let list: ImmutableList<i32> = (1..=3).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_list_round_trip() {
    let list: ImmutableList<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
    let json = serde_json::to_string(&list).unwrap();
    let restored: ImmutableList<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn test_empty_list_round_trip() {
    let empty: ImmutableList<i32> = ImmutableList::new();
    let json = serde_json::to_string(&empty).unwrap();
    assert_eq!(json, "[]");
    let restored: ImmutableList<i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_vector_serializes_as_sequence() {
    let vector: ImmutableVector<i32> = (1..=3).collect();
    let json = serde_json::to_string(&vector).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_vector_round_trip() {
    let vector: ImmutableVector<i32> = (0..50).collect();
    let json = serde_json::to_string(&vector).unwrap();
    let restored: ImmutableVector<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, vector);
}

#[rstest]
fn test_nested_containers_round_trip() {
    let nested: ImmutableVector<ImmutableList<i32>> =
        vec![(1..=2).collect(), (3..=5).collect()].into_iter().collect();
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[[1,2],[3,4,5]]");
    let restored: ImmutableVector<ImmutableList<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}
