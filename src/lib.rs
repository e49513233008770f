//! # richly
//!
//! A functional collections library for Rust providing immutable containers
//! with rich, chainable, type-transforming operations.
//!
//! ## Overview
//!
//! This library provides a small, composable contract for working with
//! homogeneous collections in a functional style:
//!
//! - **Type Classes**: `Functor`, `Foldable`, `Semigroup`, `Monoid` built on
//!   GAT-based higher-kinded type emulation
//! - **Rich Containers**: `RichContainer` (filter / map / `flat_map` / peek)
//!   and `RichSequence` (checked positional access) contracts
//! - **Immutable Containers**: [`ImmutableList`](container::ImmutableList),
//!   a structurally-shared cons list, and
//!   [`ImmutableVector`](container::ImmutableVector), a contiguous sequence
//!   with shared backing storage
//!
//! Every transformation returns a new container and never mutates the
//! receiver, so values can be freely shared and chained.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (`Functor`, `Foldable`, etc.)
//! - `container`: Rich container contracts and the immutable containers
//! - `arc`: Use `Arc` instead of `Rc` for structural sharing
//! - `serde`: Serde support for the immutable containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use richly::prelude::*;
//!
//! let numbers: ImmutableList<i32> = (1..=5).collect();
//!
//! let even_squares = numbers
//!     .clone()
//!     .filter(|number| number % 2 == 0)
//!     .map(|number| number * number);
//!
//! assert_eq!(even_squares.to_vec(), vec![4, 16]);
//! assert_eq!(numbers.len(), 5); // The source list is untouched
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use richly::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "container")]
pub mod container;
