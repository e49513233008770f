//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their element(s) while preserving the
//! container's structure.
//!
//! Unlike some functional libraries that split the mapping contract by
//! closure kind, this library's containers all hold an arbitrary number of
//! elements, so `fmap` takes an `FnMut` that is invoked once per element.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent
//! functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their
//! composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use richly::typeclass::Functor;
//!
//! let numbers = vec![1, 2, 3];
//! let doubled: Vec<i32> = numbers.fmap(|number| number * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.fmap(|number| number + 1), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their
/// contents.
///
/// `Functor` represents the ability to apply a function to every element
/// inside a container while preserving the container's structure: the
/// result has the same shape (and, for sequences, the same length and
/// order) as the source.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use richly::typeclass::Functor;
///
/// let value: Option<i32> = Some(5);
/// let text: Option<String> = value.fmap(|number| number.to_string());
/// assert_eq!(text, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every element inside the functor.
    ///
    /// The function is invoked exactly once per element, in order for
    /// ordered containers. If the function panics for an element, the
    /// panic propagates to the caller; no partial result is produced.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms one element
    ///
    /// # Returns
    ///
    /// A new functor with the transformed element(s)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Functor;
    ///
    /// let numbers = vec![1, 2, 3];
    /// let squares: Vec<i32> = numbers.fmap(|number| number * number);
    /// assert_eq!(squares, vec![1, 4, 9]);
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to references of each element.
    ///
    /// This method is useful when the functor should not be consumed, or
    /// when its elements do not implement `Clone`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes a reference to an element
    ///
    /// # Returns
    ///
    /// A new functor with the transformed element(s)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use richly::typeclass::Functor;
    ///
    /// let words = vec!["alpha".to_string(), "beta".to_string()];
    /// let lengths: Vec<usize> = words.fmap_ref(|word| word.len());
    /// assert_eq!(lengths, vec![5, 4]);
    /// // words is still available here
    /// assert_eq!(words.len(), 2);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    fn fmap<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(|value| function(value))
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(|value| function(value))
    }
}

impl<A, E> Functor for Result<A, E>
where
    E: Clone,
{
    fn fmap<B, F>(self, mut function: F) -> Result<B, E>
    where
        F: FnMut(A) -> B,
    {
        self.map(|value| function(value))
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> Result<B, E>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<A> Functor for Vec<A> {
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&A) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<A> Functor for Box<A> {
    fn fmap<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(A) -> B,
    {
        Box::new(function(*self))
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> Box<B>
    where
        F: FnMut(&A) -> B,
    {
        Box::new(function(self))
    }
}
