//! Projection, filtering, and slicing operators.
//!
//! Every operator here is a transform: it reads the source once, in order,
//! and returns a new [`Sequence`]. Order is always preserved unless the
//! operator is explicitly about order (`reverse`).
//!
//! # Examples
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! let numbers = Sequence::from(vec![1, 2, 3, 4, 5]);
//! let result = numbers.filter(|x| *x > 3).select(|y| y * 2);
//! assert_eq!(result, vec![8, 10]);
//! ```

use crate::container::Sequence;

use super::enumerable::Enumerable;

/// Element-wise transforms over an [`Enumerable`].
///
/// Blanket-implemented for every [`Enumerable`] type.
pub trait Projection: Enumerable {
    /// Maps every element with `selector`, preserving order and length.
    ///
    /// The selector borrows from `self`, so it may return references into
    /// the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let names = Sequence::from(vec![String::from("Barley"), String::from("Boots")]);
    /// let lengths = names.select(|name| name.len());
    /// assert_eq!(lengths, vec![6, 5]);
    /// ```
    fn select<'a, U, F>(&'a self, selector: F) -> Sequence<U>
    where
        F: FnMut(&'a Self::Element) -> U,
    {
        self.as_slice().iter().map(selector).collect()
    }

    /// Maps every element together with its index.
    fn select_indexed<'a, U, F>(&'a self, mut selector: F) -> Sequence<U>
    where
        F: FnMut(&'a Self::Element, usize) -> U,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .map(|(index, element)| selector(element, index))
            .collect()
    }

    /// Maps every element to a sub-sequence and flattens the results in
    /// source-then-inner order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let owners = Sequence::from(vec![vec!["Scruffy", "Sam"], vec!["Walker"]]);
    /// let pets = owners.select_many(|pets| pets.iter().copied());
    /// assert_eq!(pets, vec!["Scruffy", "Sam", "Walker"]);
    /// ```
    fn select_many<'a, U, I, F>(&'a self, selector: F) -> Sequence<U>
    where
        F: FnMut(&'a Self::Element) -> I,
        I: IntoIterator<Item = U>,
    {
        self.as_slice().iter().flat_map(selector).collect()
    }

    /// Keeps the elements matching `predicate`, in order.
    fn filter<P>(&self, mut predicate: P) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element) -> bool,
    {
        self.as_slice()
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Converts every element to `U`.
    ///
    /// The conversion is infallible, so the result always has the same
    /// length and order as the source.
    fn cast<U>(&self) -> Sequence<U>
    where
        Self::Element: Clone + Into<U>,
    {
        self.as_slice()
            .iter()
            .map(|element| element.clone().into())
            .collect()
    }

    /// Keeps the elements whose variant converts to `U`, in order.
    ///
    /// The check is a fallible conversion from a borrowed element, so an
    /// enum describing the runtime variants of a sequence can expose each
    /// variant through a `TryFrom<&Enum>` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// enum Value {
    ///     Text(&'static str),
    ///     Number(i64),
    /// }
    ///
    /// impl<'a> TryFrom<&'a Value> for &'a str {
    ///     type Error = ();
    ///     fn try_from(value: &'a Value) -> Result<Self, ()> {
    ///         match value {
    ///             Value::Text(text) => Ok(*text),
    ///             Value::Number(_) => Err(()),
    ///         }
    ///     }
    /// }
    ///
    /// let values = Sequence::from(vec![Value::Text("dogs"), Value::Number(13), Value::Text("cats")]);
    /// assert_eq!(values.of_type::<&str>(), vec!["dogs", "cats"]);
    /// ```
    fn of_type<'a, U>(&'a self) -> Sequence<U>
    where
        &'a Self::Element: TryInto<U>,
    {
        self.as_slice()
            .iter()
            .filter_map(|element| element.try_into().ok())
            .collect()
    }

    /// Combines elements of `self` and `other` pairwise by index.
    ///
    /// The result is as long as the shorter input; excess elements of the
    /// longer input are dropped.
    fn zip<'a, E, R, F>(&'a self, other: &'a E, mut combiner: F) -> Sequence<R>
    where
        E: Enumerable + ?Sized,
        F: FnMut(&'a Self::Element, &'a E::Element) -> R,
    {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(first, second)| combiner(first, second))
            .collect()
    }

    /// Returns the elements of `self` followed by the elements of `other`.
    fn concat<E>(&self, other: &E) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        E: Enumerable<Element = Self::Element> + ?Sized,
    {
        self.as_slice()
            .iter()
            .chain(other.as_slice())
            .cloned()
            .collect()
    }

    /// Returns the elements in reverse order.
    fn reverse(&self) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
    {
        self.as_slice().iter().rev().cloned().collect()
    }

    /// Skips the first `count` elements.
    fn skip(&self, count: usize) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
    {
        let slice = self.as_slice();
        Sequence::from(&slice[count.min(slice.len())..])
    }

    /// Skips the last `count` elements.
    fn skip_last(&self, count: usize) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
    {
        let slice = self.as_slice();
        Sequence::from(&slice[..slice.len().saturating_sub(count)])
    }

    /// Skips elements while `predicate` holds, then returns the rest.
    fn skip_while<P>(&self, mut predicate: P) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element) -> bool,
    {
        self.as_slice()
            .iter()
            .skip_while(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Returns the first `count` elements.
    fn take(&self, count: usize) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
    {
        let slice = self.as_slice();
        Sequence::from(&slice[..count.min(slice.len())])
    }

    /// Returns the last `count` elements.
    fn take_last(&self, count: usize) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
    {
        let slice = self.as_slice();
        Sequence::from(&slice[slice.len().saturating_sub(count)..])
    }

    /// Returns elements while `predicate` holds and stops at the first
    /// element that fails it.
    fn take_while<P>(&self, mut predicate: P) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element) -> bool,
    {
        self.as_slice()
            .iter()
            .take_while(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Returns a copy of the sequence, or a single `Default::default()` when
    /// the sequence is empty.
    fn default_if_empty(&self) -> Sequence<Self::Element>
    where
        Self::Element: Clone + Default,
    {
        self.default_if_empty_with(Self::Element::default())
    }

    /// Returns a copy of the sequence, or a single `value` when the sequence
    /// is empty.
    fn default_if_empty_with(&self, value: Self::Element) -> Sequence<Self::Element>
    where
        Self::Element: Clone,
    {
        if self.as_slice().is_empty() {
            Sequence::singleton(value)
        } else {
            Sequence::from(self.as_slice())
        }
    }
}

impl<E: Enumerable + ?Sized> Projection for E {}
