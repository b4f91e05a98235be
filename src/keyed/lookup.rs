//! Multi-valued keyed output: [`Grouping`] and [`Lookup`].
//!
//! A [`Lookup`] maps each key to the ordered sequence of values that share
//! it. Keys are never rejected: a repeated key appends to its existing group.
//! Groups are kept in first-seen key order and the values inside a group in
//! first-seen element order.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::container::Sequence;
use crate::query::Enumerable;

use super::hasher::{KeyIndex, key_index};

/// A key together with the ordered values that share it.
///
/// A grouping is itself [`Enumerable`] over its values.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let pets = Sequence::from(vec![("Barley", 8), ("Boots", 4), ("Daisy", 4)]);
/// let by_age = pets.group_by_with(|(_, age)| *age, |(name, _)| *name);
///
/// let young = &by_age.groups()[1];
/// assert_eq!(*young.key(), 4);
/// assert_eq!(young.count(), 2);
/// assert_eq!(young.elements(), &Sequence::from(vec!["Boots", "Daisy"]));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grouping<K, V> {
    key: K,
    elements: Sequence<V>,
}

impl<K, V> Grouping<K, V> {
    /// Returns the key shared by every value of the group.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the values of the group in first-seen order.
    #[inline]
    pub const fn elements(&self) -> &Sequence<V> {
        &self.elements
    }

    /// Splits the group into its key and values.
    #[must_use]
    pub fn into_parts(self) -> (K, Sequence<V>) {
        (self.key, self.elements)
    }
}

impl<K, V> Enumerable for Grouping<K, V> {
    type Element = V;

    #[inline]
    fn as_slice(&self) -> &[V] {
        self.elements.as_slice()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Grouping<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Grouping")
            .field("key", &self.key)
            .field("elements", &self.elements)
            .finish()
    }
}

/// A key to ordered-sequence map that permits repeated keys.
///
/// Produced by `group_by` and `to_lookup`. A lookup is [`Enumerable`] over
/// its [`Grouping`]s, so the whole query vocabulary applies to the groups.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let packages = Sequence::from(vec![
///     "Coho Vineyard",
///     "Lucerne Publishing",
///     "Wingtip Toys",
///     "Contoso Pharmaceuticals",
/// ]);
/// let lookup = packages.to_lookup(|company| company.chars().next());
///
/// assert_eq!(lookup.len(), 3);
/// assert_eq!(
///     lookup.get(&Some('C')),
///     Some(&Sequence::from(vec!["Coho Vineyard", "Contoso Pharmaceuticals"]))
/// );
/// assert_eq!(lookup.get(&Some('Z')), None);
/// ```
#[derive(Clone)]
pub struct Lookup<K, V> {
    groups: Vec<Grouping<K, V>>,
    index: KeyIndex<K, usize>,
}

impl<K, V> Lookup<K, V> {
    /// Returns the number of distinct keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the lookup holds no groups.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the groups in first-seen key order.
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Grouping<K, V>] {
        &self.groups
    }

    /// Returns an iterator over the groups in first-seen key order.
    pub fn iter(&self) -> std::slice::Iter<'_, Grouping<K, V>> {
        self.groups.iter()
    }

    /// Returns an iterator over the keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(Grouping::key)
    }

    /// Consumes the lookup and returns its groups.
    #[must_use]
    pub fn into_groups(self) -> Vec<Grouping<K, V>> {
        self.groups
    }
}

impl<K: Hash + Eq + Clone, V> Lookup<K, V> {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty lookup with room for `capacity` distinct keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            groups: Vec::with_capacity(capacity),
            index: key_index(capacity),
        }
    }

    /// Appends `value` to the group for `key`, creating the group if this is
    /// the first time `key` is seen.
    pub fn push(&mut self, key: K, value: V) {
        if let Some(&position) = self.index.get(&key) {
            self.groups[position].elements.add(value);
        } else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push(Grouping {
                key,
                elements: Sequence::singleton(value),
            });
        }
    }

    /// Returns the values stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&Sequence<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| &self.groups[position].elements)
    }

    /// Returns `true` if at least one value is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K: Hash + Eq + Clone, V> Default for Lookup<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for Lookup<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (key, value) in iter {
            lookup.push(key, value);
        }
        lookup
    }
}

impl<K, V> Enumerable for Lookup<K, V> {
    type Element = Grouping<K, V>;

    #[inline]
    fn as_slice(&self) -> &[Grouping<K, V>] {
        &self.groups
    }
}

impl<'a, K, V> IntoIterator for &'a Lookup<K, V> {
    type Item = &'a Grouping<K, V>;
    type IntoIter = std::slice::Iter<'a, Grouping<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<K, V> IntoIterator for Lookup<K, V> {
    type Item = Grouping<K, V>;
    type IntoIter = std::vec::IntoIter<Grouping<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Lookup<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K: Eq, V: Eq> Eq for Lookup<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Lookup<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.groups.iter().map(|group| (&group.key, &group.elements)))
            .finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for Lookup<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.key, &group.elements)?;
        }
        map.end()
    }
}
