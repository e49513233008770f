//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, which represents types whose
//! elements can be reduced (folded) into a single value.
//!
//! A `Foldable` provides a way to traverse a data structure and accumulate
//! results from all elements into a summary value. Several derived queries
//! (`find`, `exists`, `for_all`, `to_list`) are provided on top of the fold
//! primitives.
//!
//! # Properties
//!
//! While `Foldable` does not have laws as strict as other type classes,
//! implementations should satisfy:
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use richly::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none_value: Option<i32> = None;
//! let result = none_value.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// `Foldable` provides a unified interface for traversing data structures
/// and accumulating their elements into a single result.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// All other methods have default implementations derived from the folds,
/// though implementations may override them with more efficient versions.
///
/// # Examples
///
/// ```rust
/// use richly::typeclass::Foldable;
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(numbers.fold_left(0, |acc, n| acc + n), 6);
/// ```
pub trait Foldable: TypeConstructor + Sized {
    /// Folds the structure from the left.
    ///
    /// Processes elements in order, threading an accumulator through each
    /// application.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Combines the accumulator with each element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Foldable;
    ///
    /// let numbers = vec![1, 2, 3];
    /// let concatenated = numbers.fold_left(String::new(), |mut acc, n| {
    ///     acc.push_str(&n.to_string());
    ///     acc
    /// });
    /// assert_eq!(concatenated, "123");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from the right.
    ///
    /// Processes elements in reverse order.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Combines each element with the accumulator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Foldable;
    ///
    /// let numbers = vec![1, 2, 3];
    /// let concatenated = numbers.fold_right(String::new(), |n, mut acc| {
    ///     acc.insert_str(0, &n.to_string());
    ///     acc
    /// });
    /// assert_eq!(concatenated, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Foldable;
    ///
    /// let words = vec!["a", "b", "c"];
    /// let joined: String = words.fold_map(|word| word.to_string());
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.length() == 0
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects all elements into a `Vec` in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Foldable;
    ///
    /// assert_eq!(Some(1).to_list(), vec![1]);
    /// ```
    fn to_list(self) -> Vec<Self::Inner> {
        self.fold_left(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Returns the first element that satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Foldable;
    ///
    /// let numbers = vec![1, 2, 3, 4];
    /// assert_eq!(numbers.find(|n| n % 2 == 0), Some(2));
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(None, |found, element| {
            if found.is_some() {
                found
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Foldable;
    ///
    /// let numbers = vec![1, 2, 3];
    /// assert!(numbers.exists(|n| *n == 2));
    /// assert!(!numbers.exists(|n| *n == 9));
    /// ```
    fn exists<P>(&self, predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone().find(predicate).is_some()
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Vacuously `true` for an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Foldable;
    ///
    /// let numbers = vec![2, 4, 6];
    /// assert!(numbers.for_all(|n| n % 2 == 0));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<A, E> Foldable for Result<A, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Ok(value) => function(init, value),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Ok(value) => function(value, init),
            Err(_) => init,
        }
    }
}

impl<A> Foldable for Vec<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn length(&self) -> usize {
        self.len()
    }
}
