//! Set algebra over ordered sequences.
//!
//! All operators treat their inputs as multisets reduced to sets by first
//! occurrence: the output keeps the first element of each equivalence class,
//! in the order those first occurrences appear.
//!
//! Equality is pluggable through [`Equivalence`]; the plain forms use
//! [`Structural`] (`PartialEq`). Comparison is pairwise, so elements need no
//! `Hash` or `Ord` and floating-point values work as-is.
//!
//! Elements (or keys) that are `Hash + Eq` can use the `*_hashed` forms
//! instead. They give the same results in the same order and run in linear
//! time, using the hasher selected by the `fxhash` / `ahash` features.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity     |
//! |------------------|----------------|
//! | `distinct`       | O(n * d)       |
//! | `union`          | O((n + m) * d) |
//! | `intersect`      | O(n * (d + m)) |
//! | `except`         | O(n * (d + m)) |
//! | `contains`       | O(n)           |
//! | `sequence_equal` | O(n)           |
//!
//! | `*_hashed`       | O(n + m)       |
//!
//! where `d` is the number of distinct elements emitted.

use std::hash::Hash;

use crate::container::Sequence;
use crate::keyed::{KeySet, key_set};

use super::enumerable::Enumerable;
use super::equality::{Equivalence, Structural, contains_equivalent};

/// Appends `candidate` to `emitted` unless an equivalent element is already there.
fn push_unseen<T, Q>(emitted: &mut Vec<T>, candidate: &T, equality: &Q)
where
    T: Clone,
    Q: Equivalence<T> + ?Sized,
{
    if !contains_equivalent(emitted, candidate, equality) {
        emitted.push(candidate.clone());
    }
}

/// Set operators over an [`Enumerable`].
///
/// Blanket-implemented for every [`Enumerable`] type.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let first = Sequence::from(vec![5, 3, 9, 7, 5, 9, 3, 7]);
/// let second = Sequence::from(vec![8, 3, 6, 4, 4, 9, 1, 0]);
///
/// assert_eq!(first.union(&second), vec![5, 3, 9, 7, 8, 6, 4, 1, 0]);
/// assert_eq!(first.intersect(&second), vec![3, 9]);
/// assert_eq!(first.except(&second), vec![5, 7]);
/// ```
pub trait SetAlgebra: Enumerable {
    /// Keeps the first occurrence of every distinct element.
    fn distinct(&self) -> Sequence<Self::Element>
    where
        Self::Element: Clone + PartialEq,
    {
        self.distinct_with(Structural)
    }

    /// Keeps the first element for every distinct key produced by `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let pets = Sequence::from(vec![("Whiskers", 1), ("Boots", 4), ("Barley", 8), ("Daisy", 4)]);
    /// let by_age = pets.distinct_by(|(_, age)| *age);
    /// assert_eq!(by_age, vec![("Whiskers", 1), ("Boots", 4), ("Barley", 8)]);
    /// ```
    fn distinct_by<K, F>(&self, mut key: F) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        K: PartialEq,
        F: FnMut(&Self::Element) -> K,
    {
        let mut seen_keys: Vec<K> = Vec::new();
        let mut emitted = Vec::new();
        for element in self.as_slice() {
            let element_key = key(element);
            if !seen_keys.contains(&element_key) {
                seen_keys.push(element_key);
                emitted.push(element.clone());
            }
        }
        Sequence::from(emitted)
    }

    /// Keeps the first occurrence of every element distinct under `equality`.
    fn distinct_with<Q>(&self, equality: Q) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        Q: Equivalence<Self::Element>,
    {
        let mut emitted = Vec::new();
        for element in self.as_slice() {
            push_unseen(&mut emitted, element, &equality);
        }
        Sequence::from(emitted)
    }

    /// Returns the distinct elements of `self` followed by the elements of
    /// `other` not already emitted.
    fn union<E>(&self, other: &E) -> Sequence<Self::Element>
    where
        Self::Element: Clone + PartialEq,
        E: Enumerable<Element = Self::Element> + ?Sized,
    {
        self.union_with(other, Structural)
    }

    /// [`SetAlgebra::union`] under a custom equality.
    fn union_with<E, Q>(&self, other: &E, equality: Q) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        E: Enumerable<Element = Self::Element> + ?Sized,
        Q: Equivalence<Self::Element>,
    {
        let mut emitted = Vec::new();
        for element in self.as_slice().iter().chain(other.as_slice()) {
            push_unseen(&mut emitted, element, &equality);
        }
        Sequence::from(emitted)
    }

    /// Keeps the first occurrences of elements of `self` that have an equal
    /// element in `other`.
    fn intersect<E>(&self, other: &E) -> Sequence<Self::Element>
    where
        Self::Element: Clone + PartialEq,
        E: Enumerable<Element = Self::Element> + ?Sized,
    {
        self.intersect_with(other, Structural)
    }

    /// [`SetAlgebra::intersect`] under a custom equality.
    fn intersect_with<E, Q>(&self, other: &E, equality: Q) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        E: Enumerable<Element = Self::Element> + ?Sized,
        Q: Equivalence<Self::Element>,
    {
        let mut emitted = Vec::new();
        for element in self.as_slice() {
            if contains_equivalent(other.as_slice(), element, &equality) {
                push_unseen(&mut emitted, element, &equality);
            }
        }
        Sequence::from(emitted)
    }

    /// Keeps the first occurrences of elements of `self` that have no equal
    /// element in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let numbers = Sequence::from(vec![2.0, 2.1, 2.2, 2.3, 2.4, 2.5]);
    /// let removed = Sequence::from(vec![2.2, 2.3]);
    /// assert_eq!(numbers.except(&removed), vec![2.0, 2.1, 2.4, 2.5]);
    /// ```
    fn except<E>(&self, other: &E) -> Sequence<Self::Element>
    where
        Self::Element: Clone + PartialEq,
        E: Enumerable<Element = Self::Element> + ?Sized,
    {
        self.except_with(other, Structural)
    }

    /// [`SetAlgebra::except`] under a custom equality.
    fn except_with<E, Q>(&self, other: &E, equality: Q) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        E: Enumerable<Element = Self::Element> + ?Sized,
        Q: Equivalence<Self::Element>,
    {
        let mut emitted = Vec::new();
        for element in self.as_slice() {
            if !contains_equivalent(other.as_slice(), element, &equality) {
                push_unseen(&mut emitted, element, &equality);
            }
        }
        Sequence::from(emitted)
    }

    /// [`SetAlgebra::distinct`] for hashable elements, in linear time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let ages = Sequence::from(vec![21, 46, 46, 55, 17, 21, 55, 55]);
    /// assert_eq!(ages.distinct_hashed(), ages.distinct());
    /// ```
    fn distinct_hashed(&self) -> Sequence<Self::Element>
    where
        Self::Element: Clone + Hash + Eq,
    {
        self.distinct_by_hashed(|element| element)
    }

    /// [`SetAlgebra::distinct_by`] for hashable keys, in linear time.
    fn distinct_by_hashed<'a, K, F>(&'a self, mut key: F) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        K: Hash + Eq,
        F: FnMut(&'a Self::Element) -> K,
    {
        let elements = self.as_slice();
        let mut seen = key_set(elements.len());
        elements
            .iter()
            .filter(|element| seen.insert(key(*element)))
            .cloned()
            .collect()
    }

    /// [`SetAlgebra::union`] for hashable elements, in linear time.
    fn union_hashed<E>(&self, other: &E) -> Sequence<Self::Element>
    where
        Self::Element: Clone + Hash + Eq,
        E: Enumerable<Element = Self::Element> + ?Sized,
    {
        let left = self.as_slice();
        let right = other.as_slice();
        let mut seen = key_set(left.len() + right.len());
        left.iter()
            .chain(right)
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect()
    }

    /// [`SetAlgebra::intersect`] for hashable elements, in linear time.
    fn intersect_hashed<E>(&self, other: &E) -> Sequence<Self::Element>
    where
        Self::Element: Clone + Hash + Eq,
        E: Enumerable<Element = Self::Element> + ?Sized,
    {
        let kept: KeySet<&Self::Element> = other.as_slice().iter().collect();
        let mut emitted = key_set(kept.len());
        self.as_slice()
            .iter()
            .filter(|element| kept.contains(*element) && emitted.insert(*element))
            .cloned()
            .collect()
    }

    /// [`SetAlgebra::except`] for hashable elements, in linear time.
    fn except_hashed<E>(&self, other: &E) -> Sequence<Self::Element>
    where
        Self::Element: Clone + Hash + Eq,
        E: Enumerable<Element = Self::Element> + ?Sized,
    {
        let removed: KeySet<&Self::Element> = other.as_slice().iter().collect();
        let mut emitted = key_set(self.count());
        self.as_slice()
            .iter()
            .filter(|element| !removed.contains(*element) && emitted.insert(*element))
            .cloned()
            .collect()
    }

    /// Returns `true` if both sequences have the same length and equal
    /// elements at every index.
    fn sequence_equal<E>(&self, other: &E) -> bool
    where
        Self::Element: PartialEq,
        E: Enumerable<Element = Self::Element> + ?Sized,
    {
        self.sequence_equal_with(other, Structural)
    }

    /// [`SetAlgebra::sequence_equal`] under a custom equality.
    fn sequence_equal_with<E, Q>(&self, other: &E, equality: Q) -> bool
    where
        E: Enumerable<Element = Self::Element> + ?Sized,
        Q: Equivalence<Self::Element>,
    {
        let left = self.as_slice();
        let right = other.as_slice();
        left.len() == right.len()
            && left
                .iter()
                .zip(right)
                .all(|(first, second)| equality.equivalent(first, second))
    }

    /// Returns `true` if any element equals `value`.
    fn contains(&self, value: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.contains_with(value, Structural)
    }

    /// [`SetAlgebra::contains`] under a custom equality.
    fn contains_with<Q>(&self, value: &Self::Element, equality: Q) -> bool
    where
        Q: Equivalence<Self::Element>,
    {
        contains_equivalent(self.as_slice(), value, &equality)
    }
}

impl<E: Enumerable + ?Sized> SetAlgebra for E {}
