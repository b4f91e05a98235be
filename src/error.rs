//! Error types for query operators.
//!
//! Every fallible operator in this crate reports failure through
//! [`QueryError`]. Errors are returned synchronously to the caller; operators
//! never mutate their inputs, and mutation methods on
//! [`Sequence`](crate::container::Sequence) validate their arguments before
//! touching the container, so a returned error always leaves the source
//! exactly as it was.

/// Represents the errors that query operators and container mutations can
/// produce.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let numbers: Sequence<i32> = Sequence::from(vec![1, 2, 3, 4, 5]);
/// assert_eq!(
///     numbers.element_at(5),
///     Err(QueryError::IndexOutOfRange { index: 5, length: 5 })
/// );
///
/// let empty: Sequence<i32> = Sequence::new();
/// assert_eq!(empty.first(), Err(QueryError::EmptySequence));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryError {
    /// An indexed access, insertion, or removal used a position outside the
    /// valid range of the sequence.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },
    /// A terminal reduction found no element to operate on.
    EmptySequence,
    /// A `single` operator found zero or more than one qualifying element.
    NotExactlyOneMatch {
        /// The number of qualifying elements seen before giving up (`0` or `2`).
        count: usize,
    },
    /// Two elements produced equal keys while building a dictionary.
    DuplicateKey {
        /// The position of the element whose key collided with an earlier one.
        position: usize,
    },
    /// A generated integer range would run past `i64::MAX`.
    RangeOverflow {
        /// The first value of the requested range.
        start: i64,
        /// The requested number of values.
        count: usize,
    },
}

impl QueryError {
    /// Returns `true` if this is an [`QueryError::IndexOutOfRange`] error.
    #[must_use]
    pub const fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is an [`QueryError::EmptySequence`] error.
    #[must_use]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence)
    }

    /// Returns `true` if this is a [`QueryError::NotExactlyOneMatch`] error.
    #[must_use]
    pub const fn is_not_exactly_one_match(&self) -> bool {
        matches!(self, Self::NotExactlyOneMatch { .. })
    }

    /// Returns `true` if this is a [`QueryError::DuplicateKey`] error.
    #[must_use]
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Returns `true` if this is a [`QueryError::RangeOverflow`] error.
    #[must_use]
    pub const fn is_range_overflow(&self) -> bool {
        matches!(self, Self::RangeOverflow { .. })
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "index {index} is out of range for a sequence of length {length}"
            ),
            Self::EmptySequence => write!(formatter, "the source sequence is empty"),
            Self::NotExactlyOneMatch { count } => write!(
                formatter,
                "the sequence does not contain exactly one matching element (found {count})"
            ),
            Self::DuplicateKey { position } => write!(
                formatter,
                "an element with the same key already exists (element {position})"
            ),
            Self::RangeOverflow { start, count } => write!(
                formatter,
                "a range of {count} values starting at {start} overflows i64"
            ),
        }
    }
}

impl std::error::Error for QueryError {}

/// A specialized `Result` for query operators.
pub type QueryResult<T> = Result<T, QueryError>;
