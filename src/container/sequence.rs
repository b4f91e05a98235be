//! Mutable ordered container.
//!
//! [`Sequence`] is a thin owner of a `Vec<T>` whose API follows the
//! vocabulary of query-language lists: `add`, `prepend`, `insert`,
//! `remove_at`, `remove_all`, and so on. Every mutation that takes a position
//! validates it first and returns [`QueryError::IndexOutOfRange`] without
//! modifying anything when it is invalid.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `add`        | O(1)*      |
//! | `prepend`    | O(n)       |
//! | `insert`     | O(n)       |
//! | `remove_at`  | O(n)       |
//! | `remove`     | O(n)       |
//! | `remove_all` | O(n)       |
//! | `get`        | O(1)       |
//! | `len`        | O(1)       |
//!
//! \* amortized

use std::fmt;
use std::iter::FromIterator;

use crate::error::{QueryError, QueryResult};

/// A mutable, index-addressable sequence of elements.
///
/// Insertion order is significant and preserved; only operators that
/// explicitly reorder (such as ordering or `reverse`) produce a different
/// order, and they do so in a new container.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let mut numbers = Sequence::from(vec![1, 2, 3]);
/// numbers.add(4);
/// assert_eq!(numbers.len(), 4);
/// assert_eq!(numbers.filter(|n| *n % 2 == 0), vec![2, 4]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::container::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a new empty sequence with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates a sequence containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` when the
    /// index is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns an iterator over references to the elements, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence and returns the underlying vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Appends an element to the end of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::container::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// sequence.add("hey");
    /// assert_eq!(sequence.get(0), Some(&"hey"));
    /// ```
    #[inline]
    pub fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Appends an element to the end of the sequence.
    ///
    /// Identical to [`Sequence::add`]; provided for symmetry with
    /// [`Sequence::prepend`].
    #[inline]
    pub fn append(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Inserts an element at the front of the sequence.
    #[inline]
    pub fn prepend(&mut self, element: T) {
        self.elements.insert(0, element);
    }

    /// Appends every element of `elements`, in iteration order.
    pub fn add_range<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(elements);
    }

    /// Inserts an element at `index`, shifting later elements to the right.
    ///
    /// `index` may equal the current length, which appends.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::IndexOutOfRange`] when `index > len`. The
    /// sequence is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let mut sequence = Sequence::from(vec![1, 3]);
    /// sequence.insert(1, 2).unwrap();
    /// assert_eq!(sequence, vec![1, 2, 3]);
    /// assert!(sequence.insert(5, 9).is_err());
    /// assert_eq!(sequence.len(), 3);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> QueryResult<()> {
        if index > self.elements.len() {
            return Err(QueryError::IndexOutOfRange {
                index,
                length: self.elements.len(),
            });
        }
        self.elements.insert(index, element);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::IndexOutOfRange`] when `index >= len`. The
    /// sequence is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> QueryResult<T> {
        if index >= self.elements.len() {
            return Err(QueryError::IndexOutOfRange {
                index,
                length: self.elements.len(),
            });
        }
        Ok(self.elements.remove(index))
    }

    /// Removes every element matching `predicate` and returns the sequence
    /// for further chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let mut names = Sequence::from(vec!["Oviraptor", "Amargasaurus", "Gallimimus"]);
    /// names.remove_all(|name| name.ends_with("saurus"));
    /// assert_eq!(names, vec!["Oviraptor", "Gallimimus"]);
    /// ```
    pub fn remove_all<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.retain(|element| !predicate(element));
        self
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Removes the first element equal to `element`.
    ///
    /// Returns `true` if an element was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::container::Sequence;
    ///
    /// let mut fruits = Sequence::from(vec!["apple", "orange"]);
    /// assert!(fruits.remove(&"orange"));
    /// assert!(!fruits.remove(&"strawberry"));
    /// assert_eq!(fruits.len(), 1);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        match self.elements.iter().position(|candidate| candidate == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Sequence<i64> {
    /// Generates `count` consecutive integers starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::RangeOverflow`] if the last value,
    /// `start + count - 1`, does not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let squares = Sequence::range(1, 4).unwrap().select(|value| value * value);
    /// assert_eq!(squares, vec![1, 4, 9, 16]);
    ///
    /// assert!(Sequence::range(i64::MAX, 2).is_err());
    /// ```
    pub fn range(start: i64, count: usize) -> QueryResult<Self> {
        let overflow = QueryError::RangeOverflow { start, count };
        if let Some(last_offset) = count.checked_sub(1) {
            let last_offset = i64::try_from(last_offset).map_err(|_| overflow)?;
            start.checked_add(last_offset).ok_or(overflow)?;
        }
        Ok((0..count)
            .scan(start, |next, _| {
                let current = *next;
                *next = next.saturating_add(1);
                Some(current)
            })
            .collect())
    }
}

impl<T: Clone> Sequence<T> {
    /// Generates a sequence holding `count` independent copies of `element`.
    #[must_use]
    pub fn repeat(element: T, count: usize) -> Self {
        Self {
            elements: vec![element; count],
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: Vec::from(elements),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

/// An owning iterator over the elements of a [`Sequence`].
pub struct SequenceIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SequenceIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SequenceIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SequenceIntoIterator<T> {}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.elements == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.elements.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.elements.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Sequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Sequence::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_empty() {
        let sequence: Sequence<i32> = Sequence::new();
        let json = serde_json::to_string(&sequence).unwrap();
        assert_eq!(json, "[]");
    }

    #[rstest]
    fn test_deserialize_multiple_elements() {
        let sequence: Sequence<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(sequence, vec![1, 2, 3]);
    }
}
