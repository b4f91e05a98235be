//! The `Enumerable` trait - read-only access to an ordered run of elements.
//!
//! Every query operator in this crate is a provided method on an extension
//! trait that is blanket-implemented for all [`Enumerable`] types. An
//! implementor only has to expose its elements as a contiguous slice; the
//! operators take it from there and never mutate it.
//!
//! # Implementors
//!
//! - [`Sequence<T>`]
//! - [`OrderedSequence<T>`](super::OrderedSequence)
//! - [`Lookup<K, V>`](crate::keyed::Lookup), as a sequence of groupings
//! - [`Dictionary<K, V>`](crate::keyed::Dictionary), as a sequence of
//!   key/value pairs
//!
//! Standard containers are not implementors. `Vec<T>`, arrays, and slices
//! share the inherent slice methods `first`, `reverse`, `contains`,
//! `concat`, and `join`; an operator of the same name would shadow them on
//! every `Vec` once the prelude is in scope. Wrap them with
//! [`Sequence::from`] instead.

use crate::container::Sequence;

use super::ordering::OrderedSequence;

/// A type that can be queried as an ordered sequence of elements.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let numbers = Sequence::from(vec![1, 2, 3, 4, 5]);
/// assert_eq!(numbers.count(), 5);
/// assert_eq!(numbers.to_sequence(), Sequence::from(vec![1, 2, 3, 4, 5]));
/// ```
pub trait Enumerable {
    /// The type of the elements in the sequence.
    type Element;

    /// Returns the current contents as a slice, in iteration order.
    fn as_slice(&self) -> &[Self::Element];

    /// Returns the number of elements.
    #[inline]
    fn count(&self) -> usize {
        self.as_slice().len()
    }

    /// Copies the elements into a new `Vec`.
    fn to_vec(&self) -> Vec<Self::Element>
    where
        Self::Element: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Copies the elements into a new [`Sequence`].
    ///
    /// The result is independently owned; mutating it never affects `self`.
    fn to_sequence(&self) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
    {
        Sequence::from(self.as_slice().to_vec())
    }

    /// Returns the ordering chain this value carries, if it is an
    /// [`OrderedSequence`].
    ///
    /// [`Sorting`](super::Sorting)'s `then_by*` methods use it to extend an
    /// existing chain instead of starting a new one.
    #[inline]
    fn ordering_chain(&self) -> Option<&OrderedSequence<Self::Element>> {
        None
    }

    /// Calls `action` with every element and its index, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let names = Sequence::from(vec!["Bruce", "Alfred", "Tim"]);
    /// let mut log = String::new();
    /// names.for_each(|name, index| log.push_str(&format!("{name} {index} ")));
    /// assert_eq!(log, "Bruce 0 Alfred 1 Tim 2 ");
    /// ```
    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&Self::Element, usize),
    {
        for (index, element) in self.as_slice().iter().enumerate() {
            action(element, index);
        }
    }
}

impl<T> Enumerable for Sequence<T> {
    type Element = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        Self::as_slice(self)
    }
}
