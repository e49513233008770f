//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT). The container
//! contracts need HKT to express operations like `map` and `flat_map`,
//! which replace a container's element type while keeping its shape.
//!
//! # Background
//!
//! Rust cannot natively abstract over `Option<_>` or `Vec<_>` as type
//! constructors. [`TypeConstructor`] works around this: a type names its
//! current element type (`Inner`) and how to re-apply itself to a different
//! element type (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use richly::typeclass::TypeConstructor;
//!
//! fn rebuild_empty<C: TypeConstructor>(_source: C) -> C::WithType<String>
//! where
//!     C::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let strings: Vec<String> = rebuild_empty(vec![1, 2, 3]);
//! assert!(strings.is_empty());
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Option<_>`,
/// `Vec<_>`, or this library's containers.
///
/// # Associated Types
///
/// - `Inner`: The element type this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `C: TypeConstructor`:
///
/// 1. **Consistency**: `<C as TypeConstructor>::WithType<C::Inner>` should
///    be equivalent to `C` (up to type equality).
///
/// # Example
///
/// ```rust
/// use richly::typeclass::TypeConstructor;
///
/// fn assert_inner<C: TypeConstructor<Inner = i32>>() {}
///
/// assert_inner::<Option<i32>>();
/// assert_inner::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Vec<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Vec<i32>`, `WithType<String>` is `Vec<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures the resulting
    /// type is itself a valid type constructor, so transformations chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
