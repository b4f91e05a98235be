//! Terminal aggregations: folds, sums, averages, extremes, and quantifiers.
//!
//! Operators that need at least one element (`average`, `max`, `min` and
//! their selector forms) return [`QueryError::EmptySequence`] on empty input.
//! `sum` and `aggregate` are total and return the identity or seed instead.

use std::iter::Sum;

use crate::error::{QueryError, QueryResult};

use super::enumerable::Enumerable;

/// Numbers that can be averaged.
///
/// Averages are always computed in `f64`, so integer averages do not
/// truncate.
pub trait Numeric: Copy {
    /// Converts the value to `f64`, rounding to the nearest representable
    /// value for wide integers.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Numeric for $numeric {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Keeps the earliest extreme: `replaces(candidate, current)` must return
/// `true` only when `candidate` strictly beats `current`.
fn extreme_by<T, F>(mut values: impl Iterator<Item = T>, replaces: F) -> QueryResult<T>
where
    F: Fn(&T, &T) -> bool,
{
    let first = values.next().ok_or(QueryError::EmptySequence)?;
    Ok(values.fold(first, |current, candidate| {
        if replaces(&candidate, &current) {
            candidate
        } else {
            current
        }
    }))
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> QueryResult<f64> {
    let (total, count) = values.fold((0.0, 0_usize), |(total, count), value| {
        (total + value, count + 1)
    });
    if count == 0 {
        Err(QueryError::EmptySequence)
    } else {
        Ok(total / count as f64)
    }
}

/// Reductions of an [`Enumerable`] to a single value.
///
/// Blanket-implemented for every [`Enumerable`] type.
pub trait Aggregation: Enumerable {
    /// Folds the elements left to right, starting from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let words = Sequence::from(vec!["the", "quick", "brown", "fox"]);
    /// let reversed = words.aggregate(String::new(), |sentence, word| format!("{word} {sentence}"));
    /// assert_eq!(reversed, "fox brown quick the ");
    /// ```
    fn aggregate<A, F>(&self, seed: A, reducer: F) -> A
    where
        F: FnMut(A, &Self::Element) -> A,
    {
        self.as_slice().iter().fold(seed, reducer)
    }

    /// Sums the elements. Empty input yields the additive identity.
    fn sum(&self) -> Self::Element
    where
        Self::Element: Clone + Sum,
    {
        self.as_slice().iter().cloned().sum()
    }

    /// Sums `selector(element)` over the elements.
    fn sum_by<N, F>(&self, selector: F) -> N
    where
        N: Sum,
        F: FnMut(&Self::Element) -> N,
    {
        self.as_slice().iter().map(selector).sum()
    }

    /// Arithmetic mean of the elements.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let grades = Sequence::from(vec![78, 92, 100, 37, 81]);
    /// assert_eq!(grades.average(), Ok(77.6));
    /// ```
    fn average(&self) -> QueryResult<f64>
    where
        Self::Element: Numeric,
    {
        mean(self.as_slice().iter().map(|value| value.to_f64()))
    }

    /// Arithmetic mean of `selector(element)`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn average_by<N, F>(&self, mut selector: F) -> QueryResult<f64>
    where
        N: Numeric,
        F: FnMut(&Self::Element) -> N,
    {
        mean(self.as_slice().iter().map(|element| selector(element).to_f64()))
    }

    /// Returns the greatest element. The first of several equal maxima wins.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn max(&self) -> QueryResult<&Self::Element>
    where
        Self::Element: PartialOrd,
    {
        extreme_by(self.as_slice().iter(), |candidate, current| candidate > current)
    }

    /// Returns the least element. The first of several equal minima wins.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn min(&self) -> QueryResult<&Self::Element>
    where
        Self::Element: PartialOrd,
    {
        extreme_by(self.as_slice().iter(), |candidate, current| candidate < current)
    }

    /// Returns the greatest `selector(element)`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let people = Sequence::from(vec![("Cathy", 15), ("Alice", 25), ("Bob", 50)]);
    /// assert_eq!(people.max_by(|(_, age)| *age), Ok(50));
    /// assert_eq!(people.min_by(|(_, age)| *age), Ok(15));
    /// ```
    fn max_by<N, F>(&self, selector: F) -> QueryResult<N>
    where
        N: PartialOrd,
        F: FnMut(&Self::Element) -> N,
    {
        extreme_by(self.as_slice().iter().map(selector), |candidate, current| {
            candidate > current
        })
    }

    /// Returns the least `selector(element)`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn min_by<N, F>(&self, selector: F) -> QueryResult<N>
    where
        N: PartialOrd,
        F: FnMut(&Self::Element) -> N,
    {
        extreme_by(self.as_slice().iter().map(selector), |candidate, current| {
            candidate < current
        })
    }

    /// Counts the elements matching `predicate`.
    fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.as_slice().iter().filter(|element| predicate(element)).count()
    }

    /// Returns `true` if there is at least one element.
    fn any(&self) -> bool {
        !self.as_slice().is_empty()
    }

    /// Returns `true` if some element matches `predicate`. Stops at the
    /// first match.
    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.as_slice().iter().any(predicate)
    }

    /// Returns `true` if every element matches `predicate`. Vacuously `true`
    /// on empty input; stops at the first mismatch.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.as_slice().iter().all(predicate)
    }
}

impl<E: Enumerable + ?Sized> Aggregation for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Sequence;
    use rstest::{fixture, rstest};

    #[derive(Debug, Clone, PartialEq)]
    struct Pet {
        name: &'static str,
        age: u32,
        vaccinated: bool,
    }

    #[fixture]
    fn pets() -> Sequence<Pet> {
        Sequence::from(vec![
            Pet { name: "Barley", age: 8, vaccinated: true },
            Pet { name: "Boots", age: 4, vaccinated: false },
            Pet { name: "Whiskers", age: 1, vaccinated: false },
        ])
    }

    #[rstest]
    fn test_aggregate_reverses_sentence() {
        let words: Sequence<&str> = "the quick brown fox jumps over the lazy dog"
            .split(' ')
            .collect();
        let reversed = words.aggregate(String::new(), |sentence, word| format!("{word} {sentence}"));
        assert_eq!(reversed, "dog lazy the over jumps fox brown quick the ");
    }

    #[rstest]
    fn test_quantifiers(pets: Sequence<Pet>) {
        assert!(!pets.all(|pet| pet.name.starts_with('B')));
        assert!(pets.any_where(|pet| pet.age > 1 && !pet.vaccinated));
        assert!(pets.any());
        assert_eq!(pets.count_where(|pet| !pet.vaccinated), 2);
    }

    #[rstest]
    fn test_quantifiers_on_empty() {
        let empty: Sequence<i32> = Sequence::new();
        assert!(!empty.any());
        assert!(!empty.any_where(|_| true));
        assert!(empty.all(|_| false));
    }

    #[rstest]
    #[case(vec![78, 92, 100, 37, 81], 77.6)]
    #[case(vec![1, 2], 1.5)]
    #[case(vec![-4], -4.0)]
    fn test_average(#[case] values: Vec<i32>, #[case] expected: f64) {
        let average = Sequence::from(values).average().unwrap();
        assert!((average - expected).abs() < 1e-9);
    }

    #[rstest]
    fn test_average_by(pets: Sequence<Pet>) {
        let average = pets.average_by(|pet| pet.age).unwrap();
        assert!((average - 13.0 / 3.0).abs() < 1e-9);
    }

    #[rstest]
    fn test_extremes(pets: Sequence<Pet>) {
        assert_eq!(pets.max_by(|pet| pet.age), Ok(8));
        assert_eq!(pets.min_by(|pet| pet.age), Ok(1));
        assert_eq!(Sequence::from(vec![1, 2, 3, 4, 5]).max(), Ok(&5));
        assert_eq!(Sequence::from(vec![1, 2, 3, 4, 5]).min(), Ok(&1));
    }

    #[rstest]
    fn test_extreme_ties_keep_first() {
        let pairs = Sequence::from(vec![(1, 'a'), (3, 'b'), (3, 'c'), (1, 'd')]);
        let widest = pairs.max_by(|(weight, _)| *weight).unwrap();
        assert_eq!(widest, 3);

        #[derive(Debug, PartialEq)]
        struct Weighted(u8, char);
        impl PartialOrd for Weighted {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }
        let weights = Sequence::from(vec![Weighted(3, 'b'), Weighted(3, 'c'), Weighted(1, 'd')]);
        assert_eq!(weights.max().map(|weighted| weighted.1), Ok('b'));
        assert_eq!(weights.min().map(|weighted| weighted.1), Ok('d'));
    }

    #[rstest]
    fn test_empty_input_errors() {
        let empty: Sequence<f64> = Sequence::new();
        assert_eq!(empty.average(), Err(QueryError::EmptySequence));
        assert_eq!(empty.max(), Err(QueryError::EmptySequence));
        assert_eq!(empty.min_by(|value| *value), Err(QueryError::EmptySequence));
        assert_eq!(empty.sum(), 0.0);
        assert_eq!(empty.aggregate(7.5, |total, value| total + value), 7.5);
    }

    #[rstest]
    fn test_sum_by_intersection() {
        let first = Sequence::from(vec![44, 26, 92, 30, 71, 38]);
        let second = Sequence::from(vec![39, 59, 83, 47, 26, 4, 30]);
        let shared = crate::query::SetAlgebra::intersect(&first, &second);
        assert_eq!(shared.sum_by(|x| *x), 56);
        assert_eq!(shared.sum(), 56);
    }
}
