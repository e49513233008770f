//! Property-based tests for the Functor laws.
//!
//! Verifies the identity and composition laws for every `Functor`
//! implementation in the library.

use proptest::prelude::*;
use richly::container::{ImmutableList, ImmutableVector};
use richly::typeclass::Functor;

proptest! {
    // =========================================================================
    // Identity Law: fa.fmap(|x| x) == fa
    // =========================================================================

    #[test]
    fn prop_identity_law_option(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_identity_law_vec(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert_eq!(elements.clone().fmap(|x| x), elements);
    }

    #[test]
    fn prop_identity_law_list(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list: ImmutableList<i32> = elements.iter().copied().collect();
        prop_assert_eq!(list.clone().fmap(|x| x), list);
    }

    #[test]
    fn prop_identity_law_vector(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let vector: ImmutableVector<i32> = elements.iter().copied().collect();
        prop_assert_eq!(vector.clone().fmap(|x| x), vector);
    }

    // =========================================================================
    // Composition Law: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
    // =========================================================================

    #[test]
    fn prop_composition_law_option(value in proptest::option::of(any::<i32>())) {
        let f = |x: i32| i64::from(x) + 1;
        let g = |x: i64| x * 2;
        prop_assert_eq!(value.fmap(f).fmap(g), value.fmap(|x| g(f(x))));
    }

    #[test]
    fn prop_composition_law_list(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list: ImmutableList<i32> = elements.into_iter().collect();
        let f = |x: i32| i64::from(x) + 1;
        let g = |x: i64| x * 2;
        prop_assert_eq!(
            list.clone().fmap(f).fmap(g),
            list.fmap(|x| g(f(x)))
        );
    }

    #[test]
    fn prop_composition_law_vector(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let vector: ImmutableVector<i32> = elements.into_iter().collect();
        let f = |x: i32| i64::from(x) + 1;
        let g = |x: i64| x * 2;
        prop_assert_eq!(
            vector.clone().fmap(f).fmap(g),
            vector.fmap(|x| g(f(x)))
        );
    }

    // =========================================================================
    // fmap_ref agrees with fmap
    // =========================================================================

    #[test]
    fn prop_fmap_ref_agrees_with_fmap_list(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list: ImmutableList<i32> = elements.into_iter().collect();
        let by_ref = list.fmap_ref(|x| i64::from(*x) * 7);
        let by_value = list.fmap(|x| i64::from(x) * 7);
        prop_assert_eq!(by_ref, by_value);
    }
}
