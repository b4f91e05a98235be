//! Query operators over any [`Enumerable`] source.
//!
//! The operator vocabulary is split into extension traits, each
//! blanket-implemented for every [`Enumerable`]:
//!
//! - [`Projection`]: `select`, `filter`, `select_many`, slicing, `zip`
//! - [`SetAlgebra`]: `distinct`, `union`, `intersect`, `except`, `contains`
//! - [`Sorting`]: stable multi-key `order_by` producing an [`OrderedSequence`]
//! - [`Relational`]: `group_by`, `join`, `group_join`, `to_lookup`, `to_dictionary`
//! - [`Aggregation`]: `aggregate`, `sum`, `average`, `max`, `min`, quantifiers
//! - [`ElementAccess`]: `first`, `last`, `single`, `element_at`, `index_of`
//!
//! Every operator evaluates eagerly against the source at call time and
//! never mutates it.
//!
//! # Examples
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! let people = Sequence::from(vec![("Cathy", 15), ("Alice", 25), ("Bob", 50), ("Dan", 25)]);
//!
//! let names = people
//!     .filter(|(_, age)| *age > 18)
//!     .order_by(|(_, age)| *age)
//!     .then_by(|(name, _)| *name)
//!     .select(|(name, _)| *name);
//!
//! assert_eq!(names, vec!["Alice", "Dan", "Bob"]);
//! ```

mod aggregate;
mod element;
mod enumerable;
mod equality;
mod ordering;
mod projection;
mod relational;
mod set;

pub use aggregate::{Aggregation, Numeric};
pub use element::ElementAccess;
pub use enumerable::Enumerable;
pub use equality::{ByKey, Equivalence, Structural};
pub use ordering::{Direction, OrderedSequence, Sorting};
pub use projection::Projection;
pub use relational::Relational;
pub use set::SetAlgebra;
