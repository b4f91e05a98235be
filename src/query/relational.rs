//! Grouping, joining, and keyed-output operators.
//!
//! All of these hash the selected keys (`K: Hash + Eq + Clone`). Output order
//! never depends on the hasher: groups follow first-seen key order and join
//! results follow outer order, then inner order.
//!
//! # Examples
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! let people = Sequence::from(vec!["Hedlund", "Adams", "Weiss"]);
//! let pets = Sequence::from(vec![
//!     ("Barley", "Weiss"),
//!     ("Boots", "Weiss"),
//!     ("Whiskers", "Hedlund"),
//! ]);
//!
//! let owned = people.join(&pets, |person| *person, |(_, owner)| *owner, |person, (pet, _)| {
//!     format!("{pet} - {person}")
//! });
//! assert_eq!(owned.to_vec(), ["Whiskers - Hedlund", "Barley - Weiss", "Boots - Weiss"]);
//! ```

use std::hash::Hash;

use smallvec::SmallVec;

use crate::container::Sequence;
use crate::error::QueryResult;
use crate::keyed::{Dictionary, KeyIndex, Lookup, key_index};

use super::enumerable::Enumerable;

/// Inner positions sharing a key. Most join keys match only a handful of
/// inner elements, so these stay inline.
type Positions = SmallVec<[usize; 4]>;

/// Indexes `elements` by key, keeping the positions of each key ascending.
fn index_by_key<'a, T, K, F>(elements: &'a [T], mut key: F) -> KeyIndex<K, Positions>
where
    K: Hash + Eq,
    F: FnMut(&'a T) -> K,
{
    let mut index: KeyIndex<K, Positions> = key_index(elements.len());
    for (position, element) in elements.iter().enumerate() {
        index.entry(key(element)).or_default().push(position);
    }
    index
}

/// Key-based operators over an [`Enumerable`].
///
/// Blanket-implemented for every [`Enumerable`] type.
pub trait Relational: Enumerable {
    /// Partitions the elements into groups by key.
    ///
    /// Groups follow first-seen key order and each group holds its elements
    /// in source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let numbers = Sequence::from(vec![1, 2, 3, 4, 5, 6]);
    /// let parity = numbers.group_by(|n| n % 2 == 0);
    ///
    /// assert_eq!(parity.get(&false), Some(&Sequence::from(vec![1, 3, 5])));
    /// assert_eq!(parity.get(&true), Some(&Sequence::from(vec![2, 4, 6])));
    /// ```
    fn group_by<K, F>(&self, key: F) -> Lookup<K, Self::Element>
    where
        Self::Element: Clone,
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Element) -> K,
    {
        self.group_by_with(key, <Self::Element as Clone>::clone)
    }

    /// Partitions the elements into groups by key, storing `value(element)`
    /// in place of each element.
    fn group_by_with<'a, K, V, F, G>(&'a self, mut key: F, mut value: G) -> Lookup<K, V>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&'a Self::Element) -> K,
        G: FnMut(&'a Self::Element) -> V,
    {
        let mut lookup = Lookup::new();
        for element in self.as_slice() {
            lookup.push(key(element), value(element));
        }
        lookup
    }

    /// Builds a [`Lookup`] keyed by `key`. Equivalent to [`Relational::group_by`].
    fn to_lookup<K, F>(&self, key: F) -> Lookup<K, Self::Element>
    where
        Self::Element: Clone,
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Element) -> K,
    {
        self.group_by(key)
    }

    /// Builds a [`Lookup`] keyed by `key` holding `value(element)`.
    fn to_lookup_with<'a, K, V, F, G>(&'a self, key: F, value: G) -> Lookup<K, V>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&'a Self::Element) -> K,
        G: FnMut(&'a Self::Element) -> V,
    {
        self.group_by_with(key, value)
    }

    /// Builds a [`Dictionary`] keyed by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DuplicateKey`](crate::error::QueryError::DuplicateKey)
    /// carrying the position of the first element whose key was already
    /// taken.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let words = Sequence::from(vec!["apple", "banana", "avocado"]);
    /// let result = words.to_dictionary(|word| word.chars().next());
    /// assert_eq!(result, Err(QueryError::DuplicateKey { position: 2 }));
    /// ```
    fn to_dictionary<K, F>(&self, key: F) -> QueryResult<Dictionary<K, Self::Element>>
    where
        Self::Element: Clone,
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Element) -> K,
    {
        self.to_dictionary_with(key, <Self::Element as Clone>::clone)
    }

    /// Builds a [`Dictionary`] keyed by `key` holding `value(element)`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DuplicateKey`](crate::error::QueryError::DuplicateKey)
    /// on the first repeated key.
    fn to_dictionary_with<'a, K, V, F, G>(
        &'a self,
        mut key: F,
        mut value: G,
    ) -> QueryResult<Dictionary<K, V>>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&'a Self::Element) -> K,
        G: FnMut(&'a Self::Element) -> V,
    {
        let elements = self.as_slice();
        let mut dictionary = Dictionary::with_capacity(elements.len());
        for element in elements {
            dictionary.try_insert(key(element), value(element))?;
        }
        Ok(dictionary)
    }

    /// Equality inner join.
    ///
    /// Emits `result(outer, inner)` for every pair with equal keys, ordered
    /// by outer position, then inner position. Outer elements without a
    /// match produce nothing.
    fn join<'a, E2, K, R, F, G, H>(
        &'a self,
        inner: &'a E2,
        mut outer_key: F,
        inner_key: G,
        mut result: H,
    ) -> Sequence<R>
    where
        E2: Enumerable + ?Sized,
        K: Hash + Eq,
        F: FnMut(&'a Self::Element) -> K,
        G: FnMut(&'a E2::Element) -> K,
        H: FnMut(&'a Self::Element, &'a E2::Element) -> R,
    {
        let inner_elements = inner.as_slice();
        let index = index_by_key(inner_elements, inner_key);
        let mut joined = Vec::new();
        for outer in self.as_slice() {
            if let Some(positions) = index.get(&outer_key(outer)) {
                joined.extend(
                    positions
                        .iter()
                        .map(|&position| result(outer, &inner_elements[position])),
                );
            }
        }
        Sequence::from(joined)
    }

    /// Grouped join.
    ///
    /// Emits exactly one `result(outer, matches)` per outer element, in outer
    /// order. `matches` holds the inner elements with an equal key in inner
    /// order, and is empty when nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let people = Sequence::from(vec!["Hedlund", "Adams", "Weiss"]);
    /// let pets = Sequence::from(vec![("Barley", "Weiss"), ("Boots", "Weiss")]);
    ///
    /// let counts = people.group_join(&pets, |p| *p, |(_, owner)| *owner, |person, owned| {
    ///     (*person, owned.len())
    /// });
    /// assert_eq!(counts, vec![("Hedlund", 0), ("Adams", 0), ("Weiss", 2)]);
    /// ```
    fn group_join<'a, E2, K, R, F, G, H>(
        &'a self,
        inner: &'a E2,
        mut outer_key: F,
        inner_key: G,
        mut result: H,
    ) -> Sequence<R>
    where
        E2: Enumerable + ?Sized,
        K: Hash + Eq,
        F: FnMut(&'a Self::Element) -> K,
        G: FnMut(&'a E2::Element) -> K,
        H: FnMut(&'a Self::Element, Sequence<&'a E2::Element>) -> R,
    {
        let inner_elements = inner.as_slice();
        let index = index_by_key(inner_elements, inner_key);
        self.as_slice()
            .iter()
            .map(|outer| {
                let matches: Sequence<&'a E2::Element> = index
                    .get(&outer_key(outer))
                    .map(|positions| {
                        positions
                            .iter()
                            .map(|&position| &inner_elements[position])
                            .collect()
                    })
                    .unwrap_or_default();
                result(outer, matches)
            })
            .collect()
    }
}

impl<E: Enumerable + ?Sized> Relational for E {}
