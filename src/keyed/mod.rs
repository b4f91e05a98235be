//! Keyed output structures.
//!
//! - [`Lookup`]: key to ordered sequence, repeated keys share a [`Grouping`]
//! - [`Dictionary`]: key to single value, repeated keys are an error
//!
//! Both keep their entries in first-seen order and index them by hashed key
//! (`K: Hash + Eq + Clone`). The hasher is selected by the `fxhash` and
//! `ahash` features.

mod dictionary;
mod hasher;
mod lookup;

pub(crate) use hasher::{KeyIndex, KeySet, key_index, key_set};

pub use dictionary::Dictionary;
pub use dictionary::KeyValuePair;
pub use lookup::Grouping;
pub use lookup::Lookup;

static_assertions::assert_impl_all!(Lookup<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Dictionary<String, i32>: Send, Sync, Clone);
