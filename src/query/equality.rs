//! Pluggable equality strategies for set algebra.
//!
//! Set operators (`distinct`, `union`, `intersect`, `except`, `contains`,
//! `sequence_equal`) compare elements through an [`Equivalence`]. The
//! default is [`Structural`], which defers to `PartialEq`; for derived
//! implementations on composite types this compares every field.
//!
//! Callers that want cheaper or looser equality plug in [`ByKey`] or any
//! closure of type `Fn(&T, &T) -> bool`.
//!
//! # Examples
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Product {
//!     name: &'static str,
//!     code: u32,
//! }
//!
//! let store = Sequence::from(vec![
//!     Product { name: "apple", code: 9 },
//!     Product { name: "Apple", code: 9 },
//! ]);
//!
//! assert_eq!(store.distinct().len(), 2);
//! assert_eq!(store.distinct_with(ByKey(|product: &Product| product.code)).len(), 1);
//! ```

/// A strategy deciding whether two values are equal.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `left` and `right` are considered equal.
    fn equivalent(&self, left: &T, right: &T) -> bool;
}

/// Equality through `PartialEq`.
///
/// For primitives this is value equality; for types deriving `PartialEq` it
/// is structural, field-by-field equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structural;

impl<T: PartialEq + ?Sized> Equivalence<T> for Structural {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Equality of the keys extracted by a selector.
///
/// Two values are equal when the selector produces equal keys for them.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Equivalence<T> for ByKey<F>
where
    T: ?Sized,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.0)(left) == (self.0)(right)
    }
}

impl<T, F> Equivalence<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Returns `true` if any element of `haystack` is equivalent to `needle`.
pub(crate) fn contains_equivalent<T, Q>(haystack: &[T], needle: &T, equality: &Q) -> bool
where
    Q: Equivalence<T> + ?Sized,
{
    haystack
        .iter()
        .any(|candidate| equality.equivalent(candidate, needle))
}
