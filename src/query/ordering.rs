//! Stable multi-key ordering.
//!
//! [`Sorting::order_by`] and its variants start an ordering chain and return
//! an [`OrderedSequence`]. Each `then_by` on that value appends a tie-breaker
//! to the chain.
//!
//! # Algorithm
//!
//! The primary key sorts the whole sequence with a stable sort, then the
//! sequence remembers the runs of adjacent elements that compared equal.
//! A tie-breaker only reorders inside those runs and splits them further, so
//! a key already in the chain is never evaluated again and elements equal
//! under the complete chain keep their original relative order.
//!
//! ```text
//! order_by(length):    [apple grape mango] [banana orange] [blueberry raspberry] passionfruit
//! then_by(identity):   apple grape mango banana orange blueberry raspberry passionfruit
//! ```
//!
//! # Comparers
//!
//! The default comparer is the key's `PartialOrd`. Keys that are not
//! comparable with themselves (such as `NaN`) tie with each other and sort
//! after every other key, in both directions. Custom comparers take two keys
//! and return an [`Ordering`]. Descending entries reverse the comparer's
//! result, never the key.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use crate::container::Sequence;

use super::enumerable::Enumerable;

/// Direction of a single entry in an ordering chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

impl Direction {
    #[inline]
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[inline]
fn is_incomparable<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_none()
}

/// Natural ordering of a key through `PartialOrd`, with self-incomparable
/// keys placed last regardless of `direction`.
fn natural_order<K: PartialOrd>(direction: Direction) -> impl FnMut(&K, &K) -> Ordering {
    move |left: &K, right: &K| match left.partial_cmp(right) {
        Some(ordering) => direction.apply(ordering),
        None => is_incomparable(left).cmp(&is_incomparable(right)),
    }
}

/// Reverses `comparer` when `direction` is descending.
fn directed<K, C>(mut comparer: C, direction: Direction) -> impl FnMut(&K, &K) -> Ordering
where
    C: FnMut(&K, &K) -> Ordering,
{
    move |left: &K, right: &K| direction.apply(comparer(left, right))
}

/// Rearranges `slice` so that position `i` holds the element previously at
/// `order[i]`, following permutation cycles with swaps.
fn apply_permutation<T>(slice: &mut [T], mut order: Vec<usize>) {
    for start in 0..slice.len() {
        let mut current = start;
        loop {
            let source = order[current];
            order[current] = current;
            if source == start || source == current {
                break;
            }
            slice.swap(current, source);
            current = source;
        }
    }
}

/// A sequence sorted by an ordering chain that can still be refined.
///
/// Returned by [`Sorting::order_by`] and friends. It is itself
/// [`Enumerable`], so every other operator accepts it directly. The
/// `then_by*` methods extend the chain, in place when called on an owned
/// value and on a clone when called through a shared reference.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let fruits = Sequence::from(vec![
///     "grape", "passionfruit", "banana", "mango",
///     "orange", "raspberry", "apple", "blueberry",
/// ]);
///
/// let sorted = fruits.order_by(|fruit| fruit.len()).then_by(|fruit| *fruit);
/// assert_eq!(
///     sorted.to_vec(),
///     vec!["apple", "grape", "mango", "banana", "orange", "blueberry", "raspberry", "passionfruit"]
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OrderedSequence<T> {
    /// Elements sorted by the chain so far.
    elements: Vec<T>,
    /// Runs of adjacent elements that the chain so far ranks equal. Only
    /// runs of two or more elements are kept.
    ties: Vec<Range<usize>>,
    /// Number of entries in the chain.
    depth: usize,
}

impl<T> OrderedSequence<T> {
    /// Wraps `elements` as a single run of ties awaiting a primary key.
    fn unordered(elements: Vec<T>) -> Self {
        let ties = if elements.len() > 1 {
            vec![0..elements.len()]
        } else {
            Vec::new()
        };
        Self {
            elements,
            ties,
            depth: 0,
        }
    }

    /// Sorts every remaining run of ties by one more key and records the
    /// runs that are still tied afterwards.
    fn refine<K, F, C>(mut self, mut key: F, mut comparer: C) -> Self
    where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        let mut remaining_ties = Vec::new();
        for run in std::mem::take(&mut self.ties) {
            let block = &mut self.elements[run.clone()];
            let mut keys: Vec<Option<K>> = block.iter().map(|element| Some(key(element))).collect();

            let mut order: Vec<usize> = (0..block.len()).collect();
            order.sort_by(|&left, &right| match (&keys[left], &keys[right]) {
                (Some(left), Some(right)) => comparer(left, right),
                _ => Ordering::Equal,
            });

            let sorted_keys: Vec<K> = order
                .iter()
                .filter_map(|&position| keys[position].take())
                .collect();
            apply_permutation(block, order);

            let mut tie_start = 0;
            for position in 1..=sorted_keys.len() {
                let tied = position < sorted_keys.len()
                    && comparer(&sorted_keys[tie_start], &sorted_keys[position]) == Ordering::Equal;
                if !tied {
                    if position - tie_start > 1 {
                        remaining_ties.push(run.start + tie_start..run.start + position);
                    }
                    tie_start = position;
                }
            }
        }
        self.ties = remaining_ties;
        self.depth += 1;
        self
    }

    /// Returns the number of keys in the ordering chain.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Converts into a plain [`Sequence`], discarding the chain.
    #[must_use]
    pub fn into_sequence(self) -> Sequence<T> {
        Sequence::from(self.elements)
    }

    /// Consumes the value and returns the sorted elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Breaks remaining ties by `key`, ascending.
    #[must_use]
    pub fn then_by<K, F>(self, key: F) -> Self
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.refine(key, natural_order(Direction::Ascending))
    }

    /// Breaks remaining ties by `key`, descending.
    #[must_use]
    pub fn then_by_descending<K, F>(self, key: F) -> Self
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.refine(key, natural_order(Direction::Descending))
    }

    /// Breaks remaining ties by `key` compared with `comparer`, ascending.
    #[must_use]
    pub fn then_by_with<K, F, C>(self, key: F, comparer: C) -> Self
    where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        self.refine(key, comparer)
    }

    /// Breaks remaining ties by `key` compared with `comparer`, descending.
    #[must_use]
    pub fn then_by_descending_with<K, F, C>(self, key: F, comparer: C) -> Self
    where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        self.refine(key, directed(comparer, Direction::Descending))
    }
}

impl<T> Enumerable for OrderedSequence<T> {
    type Element = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    fn ordering_chain(&self) -> Option<&OrderedSequence<T>> {
        Some(self)
    }
}

impl<T> From<OrderedSequence<T>> for Sequence<T> {
    fn from(ordered: OrderedSequence<T>) -> Self {
        ordered.into_sequence()
    }
}

impl<T> IntoIterator for OrderedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for OrderedSequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.elements == *other
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

static_assertions::assert_impl_all!(OrderedSequence<String>: Send, Sync, Clone);

/// Ordering operators over an [`Enumerable`].
///
/// Blanket-implemented for every [`Enumerable`] type.
///
/// # `then_by` without `order_by`
///
/// The `then_by*` methods here extend the chain of a borrowed
/// [`OrderedSequence`] (cloning it, since the receiver is shared). On any
/// other source there is no chain to extend, so they degrade to the matching
/// `order_by*` call and start a chain with that key as the primary key.
///
/// ```rust
/// use sequery::prelude::*;
///
/// let numbers = Sequence::from(vec![4, 5, 6, 3, 2, 1]);
/// assert_eq!(numbers.then_by(|x| *x).to_vec(), vec![1, 2, 3, 4, 5, 6]);
///
/// let pairs = Sequence::from(vec![(1, 'b'), (0, 'z'), (1, 'a')]);
/// let by_number = pairs.order_by(|pair| pair.0);
/// let shared = &by_number;
/// assert_eq!(shared.then_by(|pair| pair.1).to_vec(), vec![(0, 'z'), (1, 'a'), (1, 'b')]);
/// ```
pub trait Sorting: Enumerable {
    /// Sorts by `key` ascending with a stable sort.
    fn order_by<K, F>(&self, key: F) -> OrderedSequence<Self::Element>
    where
        Self::Element: Clone,
        K: PartialOrd,
        F: FnMut(&Self::Element) -> K,
    {
        OrderedSequence::unordered(self.as_slice().to_vec())
            .refine(key, natural_order(Direction::Ascending))
    }

    /// Sorts by `key` descending with a stable sort.
    fn order_by_descending<K, F>(&self, key: F) -> OrderedSequence<Self::Element>
    where
        Self::Element: Clone,
        K: PartialOrd,
        F: FnMut(&Self::Element) -> K,
    {
        OrderedSequence::unordered(self.as_slice().to_vec())
            .refine(key, natural_order(Direction::Descending))
    }

    /// Sorts by `key` ascending using `comparer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let words = Sequence::from(vec!["banana", "Apple", "cherry"]);
    /// let sorted = words.order_by_with(|word| word.to_lowercase(), |left, right| left.cmp(right));
    /// assert_eq!(sorted.to_vec(), vec!["Apple", "banana", "cherry"]);
    /// ```
    fn order_by_with<K, F, C>(&self, key: F, comparer: C) -> OrderedSequence<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        OrderedSequence::unordered(self.as_slice().to_vec()).refine(key, comparer)
    }

    /// Sorts by `key` descending using `comparer`.
    fn order_by_descending_with<K, F, C>(
        &self,
        key: F,
        comparer: C,
    ) -> OrderedSequence<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        OrderedSequence::unordered(self.as_slice().to_vec())
            .refine(key, directed(comparer, Direction::Descending))
    }

    /// Extends a borrowed chain, or degrades to [`Sorting::order_by`]; see
    /// the trait documentation.
    fn then_by<K, F>(&self, key: F) -> OrderedSequence<Self::Element>
    where
        Self::Element: Clone,
        K: PartialOrd,
        F: FnMut(&Self::Element) -> K,
    {
        match self.ordering_chain() {
            Some(chain) => chain.clone().then_by(key),
            None => self.order_by(key),
        }
    }

    /// Extends a borrowed chain, or degrades to
    /// [`Sorting::order_by_descending`].
    fn then_by_descending<K, F>(&self, key: F) -> OrderedSequence<Self::Element>
    where
        Self::Element: Clone,
        K: PartialOrd,
        F: FnMut(&Self::Element) -> K,
    {
        match self.ordering_chain() {
            Some(chain) => chain.clone().then_by_descending(key),
            None => self.order_by_descending(key),
        }
    }

    /// Extends a borrowed chain, or degrades to [`Sorting::order_by_with`].
    fn then_by_with<K, F, C>(&self, key: F, comparer: C) -> OrderedSequence<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        match self.ordering_chain() {
            Some(chain) => chain.clone().then_by_with(key, comparer),
            None => self.order_by_with(key, comparer),
        }
    }

    /// Extends a borrowed chain, or degrades to
    /// [`Sorting::order_by_descending_with`].
    fn then_by_descending_with<K, F, C>(
        &self,
        key: F,
        comparer: C,
    ) -> OrderedSequence<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        match self.ordering_chain() {
            Some(chain) => chain.clone().then_by_descending_with(key, comparer),
            None => self.order_by_descending_with(key, comparer),
        }
    }
}

impl<E: Enumerable + ?Sized> Sorting for E {}
