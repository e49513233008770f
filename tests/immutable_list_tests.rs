//! Unit tests for ImmutableList.
//!
//! These tests verify the correctness of the ImmutableList implementation,
//! covering construction, access, transformation, and the immutability
//! guarantees.

use richly::container::{ImmutableList, IndexOutOfRange, RichContainer, RichSequence};
use richly::typeclass::{Foldable, Functor, Monoid, Semigroup};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: ImmutableList<i32> = ImmutableList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[rstest]
fn test_singleton_holds_one_element() {
    let list = ImmutableList::singleton(42);
    assert_eq!(list.len(), 1);
    assert_eq!(list.head(), Some(&42));
}

#[rstest]
fn test_collect_from_range() {
    let list: ImmutableList<i32> = (1..=5).collect();
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_default_is_empty() {
    let list: ImmutableList<i32> = ImmutableList::default();
    assert!(list.is_empty());
}

// =============================================================================
// cons / head / tail
// =============================================================================

#[rstest]
fn test_cons_chain_builds_list_in_reverse_order() {
    let list = ImmutableList::new().cons(3).cons(2).cons(1);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_cons_does_not_modify_original() {
    let list1 = ImmutableList::singleton(1);
    let list2 = list1.cons(2);
    assert_eq!(list1.len(), 1);
    assert_eq!(list2.len(), 2);
}

#[rstest]
fn test_tail_of_empty_list_is_empty() {
    let empty: ImmutableList<i32> = ImmutableList::new();
    assert!(empty.tail().is_empty());
}

#[rstest]
fn test_tail_shares_structure_with_source() {
    let list: ImmutableList<i32> = (1..=3).collect();
    let extended = list.cons(0);
    assert_eq!(extended.tail(), list);
}

// =============================================================================
// Positional access
// =============================================================================

#[rstest]
#[case(0, Some(10))]
#[case(2, Some(30))]
#[case(3, None)]
fn test_get_option_style(#[case] index: usize, #[case] expected: Option<i32>) {
    let list: ImmutableList<i32> = [10, 20, 30].into_iter().collect();
    assert_eq!(list.get(index).copied(), expected);
}

#[rstest]
fn test_at_succeeds_within_bounds() {
    let list: ImmutableList<i32> = (1..=5).collect();
    for index in 0..5 {
        assert!(list.at(index).is_ok());
    }
}

#[rstest]
#[case(5)]
#[case(50)]
fn test_at_fails_out_of_bounds_with_details(#[case] index: usize) {
    let list: ImmutableList<i32> = (1..=5).collect();
    assert_eq!(list.at(index), Err(IndexOutOfRange { index, length: 5 }));
}

#[rstest]
fn test_at_on_empty_list_always_fails() {
    let empty: ImmutableList<i32> = ImmutableList::new();
    assert_eq!(
        empty.at(0),
        Err(IndexOutOfRange {
            index: 0,
            length: 0
        })
    );
}

#[rstest]
fn test_failed_at_leaves_list_usable() {
    let list: ImmutableList<i32> = (1..=3).collect();
    assert!(list.at(10).is_err());
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Rich operations
// =============================================================================

#[rstest]
fn test_filter_keeps_matching_in_order() {
    let list: ImmutableList<i32> = (1..=10).collect();
    let multiples = list.filter(|n| n % 3 == 0);
    assert_eq!(multiples.to_vec(), vec![3, 6, 9]);
}

#[rstest]
fn test_filter_not_complements_filter() {
    let list: ImmutableList<i32> = (1..=10).collect();
    let kept = list.clone().filter(|n| *n > 5);
    let dropped = list.filter_not(|n| *n > 5);
    assert_eq!(kept.to_vec(), vec![6, 7, 8, 9, 10]);
    assert_eq!(dropped.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_map_changes_element_type() {
    let list: ImmutableList<i32> = (1..=3).collect();
    let words: ImmutableList<String> = list.map(|n| format!("#{n}"));
    assert_eq!(
        words.to_vec(),
        vec!["#1".to_string(), "#2".to_string(), "#3".to_string()]
    );
}

#[rstest]
fn test_flat_map_flattens_in_order() {
    let list: ImmutableList<i32> = (1..=3).collect();
    let expanded = list.flat_map(|n| 0..n);
    assert_eq!(expanded.to_vec(), vec![0, 0, 1, 0, 1, 2]);
}

#[rstest]
fn test_peek_returns_chainable_list() {
    let mut trace = Vec::new();
    let result: ImmutableList<i32> = (1..=4)
        .collect::<ImmutableList<i32>>()
        .peek(|n| trace.push(*n))
        .filter(|n| n % 2 == 0);
    assert_eq!(trace, vec![1, 2, 3, 4]);
    assert_eq!(result.to_vec(), vec![2, 4]);
}

#[rstest]
fn test_each_visits_every_element_in_order() {
    let list: ImmutableList<char> = ['a', 'b', 'c'].into_iter().collect();
    let mut visited = String::new();
    list.each(|letter| visited.push(*letter));
    assert_eq!(visited, "abc");
}

// =============================================================================
// Folding and combining
// =============================================================================

#[rstest]
fn test_fold_left_sums() {
    let list: ImmutableList<i32> = (1..=5).collect();
    assert_eq!(list.fold_left(0, |acc, n| acc + n), 15);
}

#[rstest]
fn test_find_first_match() {
    let list: ImmutableList<i32> = (1..=5).collect();
    assert_eq!(list.find(|n| n % 2 == 0), Some(2));
}

#[rstest]
fn test_exists_and_for_all() {
    let list: ImmutableList<i32> = (1..=5).collect();
    assert!(list.exists(|n| *n == 3));
    assert!(list.for_all(|n| *n >= 1));
    assert!(!list.for_all(|n| *n > 1));
}

#[rstest]
fn test_combine_all_concatenates_lists() {
    let lists = vec![
        (1..=2).collect::<ImmutableList<i32>>(),
        ImmutableList::new(),
        (3..=4).collect::<ImmutableList<i32>>(),
    ];
    let combined = ImmutableList::combine_all(lists);
    assert_eq!(combined.to_vec(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_semigroup_associativity() {
    let a: ImmutableList<i32> = (1..=2).collect();
    let b: ImmutableList<i32> = (3..=4).collect();
    let c: ImmutableList<i32> = (5..=6).collect();
    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.combine(b.combine(c));
    assert_eq!(left, right);
}

// =============================================================================
// Functor behavior on the list
// =============================================================================

#[rstest]
fn test_fmap_on_empty_list() {
    let empty: ImmutableList<i32> = ImmutableList::new();
    let mapped: ImmutableList<String> = empty.fmap(|n| n.to_string());
    assert!(mapped.is_empty());
}

#[rstest]
fn test_fmap_ref_does_not_consume() {
    let list: ImmutableList<i32> = (1..=3).collect();
    let doubled = list.fmap_ref(|n| n * 2);
    assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Immutability across sharing
// =============================================================================

#[rstest]
fn test_transformations_do_not_affect_shared_lists() {
    let base: ImmutableList<i32> = (1..=5).collect();
    let shared = base.clone();

    let _ = base.clone().filter(|n| n % 2 == 0);
    let _ = base.clone().map(|n| n * 10);
    let _ = base.clone().flat_map(|n| vec![n]);

    assert_eq!(base, shared);
    assert_eq!(base.to_vec(), vec![1, 2, 3, 4, 5]);
}
