//! Positional and quantified element access.
//!
//! Each accessor comes in a failing form, which returns a [`QueryError`],
//! and an `_or_default` form, which returns `None` where the failing form
//! would return [`QueryError::EmptySequence`] or
//! [`QueryError::IndexOutOfRange`].

use crate::error::{QueryError, QueryResult};

use super::enumerable::Enumerable;

/// Resolves the result of a `single*` search from the first two matches.
fn exactly_one<'a, T>(mut matches: impl Iterator<Item = &'a T>) -> QueryResult<Option<&'a T>> {
    match (matches.next(), matches.next()) {
        (None, _) => Ok(None),
        (Some(only), None) => Ok(Some(only)),
        (Some(_), Some(_)) => Err(QueryError::NotExactlyOneMatch { count: 2 }),
    }
}

/// Element accessors over an [`Enumerable`].
///
/// Blanket-implemented for every [`Enumerable`] type.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let numbers = Sequence::from(vec![1, 2, 3, 4, 5]);
/// assert_eq!(numbers.first_where(|x| *x > 2), Ok(&3));
/// assert_eq!(numbers.last_where(|x| *x > 2), Ok(&5));
/// assert_eq!(numbers.element_at(9), Err(QueryError::IndexOutOfRange { index: 9, length: 5 }));
/// assert_eq!(numbers.single_where(|x| *x == 4), Ok(&4));
/// ```
pub trait ElementAccess: Enumerable {
    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::IndexOutOfRange`] if `index >= len`.
    fn element_at(&self, index: usize) -> QueryResult<&Self::Element> {
        let elements = self.as_slice();
        elements.get(index).ok_or(QueryError::IndexOutOfRange {
            index,
            length: elements.len(),
        })
    }

    /// Returns the element at `index`, or `None` if out of range.
    fn element_at_or_default(&self, index: usize) -> Option<&Self::Element> {
        self.as_slice().get(index)
    }

    /// Returns the position of the first element equal to `value`.
    fn index_of(&self, value: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.as_slice().iter().position(|element| element == value)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn first(&self) -> QueryResult<&Self::Element> {
        self.first_or_default().ok_or(QueryError::EmptySequence)
    }

    /// Returns the first element matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if no element matches.
    fn first_where<P>(&self, predicate: P) -> QueryResult<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.first_or_default_where(predicate)
            .ok_or(QueryError::EmptySequence)
    }

    /// Returns the first element, or `None` if there are none.
    fn first_or_default(&self) -> Option<&Self::Element> {
        self.as_slice().first()
    }

    /// Returns the first element matching `predicate`, or `None`.
    fn first_or_default_where<P>(&self, mut predicate: P) -> Option<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.as_slice().iter().find(|element| predicate(element))
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn last(&self) -> QueryResult<&Self::Element> {
        self.last_or_default().ok_or(QueryError::EmptySequence)
    }

    /// Returns the last element matching `predicate`, searching from the back.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if no element matches.
    fn last_where<P>(&self, predicate: P) -> QueryResult<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.last_or_default_where(predicate)
            .ok_or(QueryError::EmptySequence)
    }

    /// Returns the last element, or `None` if there are none.
    fn last_or_default(&self) -> Option<&Self::Element> {
        self.as_slice().last()
    }

    /// Returns the last element matching `predicate`, or `None`.
    fn last_or_default_where<P>(&self, mut predicate: P) -> Option<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.as_slice().iter().rev().find(|element| predicate(element))
    }

    /// Returns the only element.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotExactlyOneMatch`] with `count` 0 when empty
    /// and 2 when there is more than one element.
    fn single(&self) -> QueryResult<&Self::Element> {
        self.single_where(|_| true)
    }

    /// Returns the only element matching `predicate`.
    ///
    /// Scanning stops at the second match, so `count` is reported as 0 or 2.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotExactlyOneMatch`] unless exactly one element
    /// matches.
    fn single_where<P>(&self, predicate: P) -> QueryResult<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.single_or_default_where(predicate)?
            .ok_or(QueryError::NotExactlyOneMatch { count: 0 })
    }

    /// Returns the only element, or `None` if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotExactlyOneMatch`] if there is more than one
    /// element.
    fn single_or_default(&self) -> QueryResult<Option<&Self::Element>> {
        self.single_or_default_where(|_| true)
    }

    /// Returns the only element matching `predicate`, or `None` if nothing
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotExactlyOneMatch`] if more than one element
    /// matches.
    fn single_or_default_where<P>(&self, mut predicate: P) -> QueryResult<Option<&Self::Element>>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        exactly_one(self.as_slice().iter().filter(|element| predicate(element)))
    }
}

impl<E: Enumerable + ?Sized> ElementAccess for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Sequence;
    use rstest::{fixture, rstest};

    #[fixture]
    fn greetings() -> Sequence<&'static str> {
        Sequence::from(vec!["hey", "hola", "que", "tal"])
    }

    #[rstest]
    fn test_first_and_last(greetings: Sequence<&'static str>) {
        assert_eq!(greetings.first(), Ok(&"hey"));
        assert_eq!(greetings.last(), Ok(&"tal"));
        assert_eq!(greetings.first_or_default(), Some(&"hey"));
        assert_eq!(greetings.last_or_default(), Some(&"tal"));
    }

    #[rstest]
    fn test_predicated_first_and_last() {
        let numbers = Sequence::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(numbers.first_where(|x| *x > 2), Ok(&3));
        assert_eq!(numbers.last_where(|x| *x > 2), Ok(&5));
        assert_eq!(numbers.first_where(|x| *x > 9), Err(QueryError::EmptySequence));
        assert_eq!(numbers.last_or_default_where(|x| *x < 3), Some(&2));
    }

    #[rstest]
    fn test_last_where_searches_from_back() {
        let numbers = Sequence::from(vec![1, 2, 3, 4, 5]);
        let mut visited = Vec::new();
        let found = numbers.last_where(|x| {
            visited.push(*x);
            *x % 2 == 0
        });
        assert_eq!(found, Ok(&4));
        assert_eq!(visited, vec![5, 4]);
    }

    #[rstest]
    fn test_empty_accessors() {
        let empty: Sequence<String> = Sequence::new();
        assert_eq!(empty.first(), Err(QueryError::EmptySequence));
        assert_eq!(empty.last(), Err(QueryError::EmptySequence));
        assert_eq!(empty.first_or_default(), None);
        assert_eq!(empty.last_or_default(), None);
    }

    #[rstest]
    #[case(0, Ok(&"hey"))]
    #[case(3, Ok(&"tal"))]
    #[case(4, Err(QueryError::IndexOutOfRange { index: 4, length: 4 }))]
    fn test_element_at(
        greetings: Sequence<&'static str>,
        #[case] index: usize,
        #[case] expected: QueryResult<&&'static str>,
    ) {
        assert_eq!(greetings.element_at(index), expected);
        assert_eq!(greetings.element_at_or_default(index), expected.ok());
    }

    #[rstest]
    fn test_index_of(greetings: Sequence<&'static str>) {
        assert_eq!(greetings.index_of(&"que"), Some(2));
        assert_eq!(greetings.index_of(&"adios"), None);
    }

    #[rstest]
    fn test_single() {
        assert_eq!(Sequence::from(vec![7]).single(), Ok(&7));
        assert_eq!(
            Sequence::<i32>::new().single(),
            Err(QueryError::NotExactlyOneMatch { count: 0 })
        );
        assert_eq!(
            Sequence::from(vec![1, 2]).single(),
            Err(QueryError::NotExactlyOneMatch { count: 2 })
        );
    }

    #[rstest]
    fn test_single_or_default() {
        let numbers = Sequence::from(vec![1, 2, 3, 4]);
        assert_eq!(numbers.single_or_default_where(|x| *x > 9), Ok(None));
        assert_eq!(numbers.single_or_default_where(|x| *x == 3), Ok(Some(&3)));
        assert_eq!(
            numbers.single_or_default_where(|x| *x > 2),
            Err(QueryError::NotExactlyOneMatch { count: 2 })
        );
        assert_eq!(Sequence::<i32>::new().single_or_default(), Ok(None));
    }
}
