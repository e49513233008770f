//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that the
//! container contracts in this library are built on:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which is what allows `map` and `flat_map` to change a
//! container's element type while preserving its shape.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//!
//! # Examples
//!
//! ## Using Functor
//!
//! ```rust
//! use richly::typeclass::Functor;
//!
//! let value: Option<i32> = Some(21);
//! assert_eq!(value.fmap(|number| number * 2), Some(42));
//! ```
//!
//! ## Using Semigroup and Monoid
//!
//! ```rust
//! use richly::typeclass::{Monoid, Semigroup};
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! let words = vec![String::from("a"), String::from("b")];
//! assert_eq!(String::combine_all(words), "ab");
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
