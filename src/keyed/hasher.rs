//! Hasher selection for keyed structures.
//!
//! With the `fxhash` feature the fast, non-randomized `FxHash` from
//! `rustc-hash` is used; with `ahash` (and without `fxhash`) `AHash` is
//! used; otherwise the standard library's SipHash `RandomState`.
//!
//! The hasher only affects lookup speed. Iteration order of every keyed
//! structure is first-seen order and never depends on it.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "fxhash")]
pub(crate) type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type KeyHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type KeyHasher = std::collections::hash_map::RandomState;

/// Maps a key to its position in an insertion-ordered store.
pub(crate) type KeyIndex<K, V> = HashMap<K, V, KeyHasher>;

/// Creates an empty [`KeyIndex`] with room for `capacity` keys.
pub(crate) fn key_index<K, V>(capacity: usize) -> KeyIndex<K, V> {
    HashMap::with_capacity_and_hasher(capacity, KeyHasher::default())
}

/// Keys already seen by a hashed set operator.
pub(crate) type KeySet<K> = HashSet<K, KeyHasher>;

/// Creates an empty [`KeySet`] with room for `capacity` keys.
pub(crate) fn key_set<K>(capacity: usize) -> KeySet<K> {
    HashSet::with_capacity_and_hasher(capacity, KeyHasher::default())
}
