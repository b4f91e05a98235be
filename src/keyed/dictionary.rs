//! Unique-key output: [`KeyValuePair`] and [`Dictionary`].
//!
//! A [`Dictionary`] rejects a key it already holds with
//! [`QueryError::DuplicateKey`]. Entries iterate in insertion order.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use crate::error::{QueryError, QueryResult};
use crate::query::Enumerable;

use super::hasher::{KeyIndex, key_index};

/// An immutable key/value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValuePair<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValuePair<K, V> {
    /// Creates a new pair.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Splits the pair into its key and value.
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValuePair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// An insertion-ordered map with unique keys.
///
/// Produced by `to_dictionary`. A dictionary is [`Enumerable`] over its
/// [`KeyValuePair`]s.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let people = Sequence::from(vec![("Cathy", 15), ("Alice", 25), ("Bob", 50)]);
/// let ages = people.to_dictionary_with(|(name, _)| *name, |(_, age)| *age).unwrap();
///
/// assert_eq!(ages.get("Alice"), Some(&25));
/// assert_eq!(ages.max_by(|pair| *pair.value()), Ok(50));
/// assert_eq!(ages.keys().copied().collect::<Vec<_>>(), vec!["Cathy", "Alice", "Bob"]);
/// ```
#[derive(Clone)]
pub struct Dictionary<K, V> {
    entries: Vec<KeyValuePair<K, V>>,
    index: KeyIndex<K, usize>,
}

impl<K, V> Dictionary<K, V> {
    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyValuePair<K, V>> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(KeyValuePair::key)
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(KeyValuePair::value)
    }

    /// Consumes the dictionary and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<KeyValuePair<K, V>> {
        self.entries
    }
}

impl<K: Hash + Eq + Clone, V> Dictionary<K, V> {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty dictionary with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: key_index(capacity),
        }
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DuplicateKey`] if `key` is already present; the
    /// reported position is the number of entries at the time of the call.
    /// The dictionary is left unchanged.
    pub fn try_insert(&mut self, key: K, value: V) -> QueryResult<()> {
        if self.index.contains_key(&key) {
            return Err(QueryError::DuplicateKey {
                position: self.entries.len(),
            });
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(KeyValuePair { key, value });
        Ok(())
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K: Hash + Eq + Clone, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Enumerable for Dictionary<K, V> {
    type Element = KeyValuePair<K, V>;

    #[inline]
    fn as_slice(&self) -> &[KeyValuePair<K, V>] {
        &self.entries
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = &'a KeyValuePair<K, V>;
    type IntoIter = std::slice::Iter<'a, KeyValuePair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Dictionary<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for Dictionary<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for pair in &self.entries {
            map.serialize_entry(&pair.key, &pair.value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct DictionaryVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for DictionaryVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq + Clone,
    V: serde::Deserialize<'de>,
{
    type Value = Dictionary<K, V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = map.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut dictionary = Dictionary::with_capacity(capacity);
        while let Some((key, value)) = map.next_entry()? {
            dictionary
                .try_insert(key, value)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(dictionary)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Dictionary<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq + Clone,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DictionaryVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
