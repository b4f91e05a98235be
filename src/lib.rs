//! # sequery
//!
//! An in-memory sequence query library: an ordered container plus a
//! composable vocabulary of query operators.
//!
//! ## Overview
//!
//! - **Container**: [`Sequence`](container::Sequence), an ordered, growable
//!   collection with positional mutation
//! - **Operators**: projection, filtering, set algebra, stable multi-key
//!   ordering, grouping, join and group-join, aggregation, element access
//! - **Keyed output**: [`Lookup`](keyed::Lookup) (multi-valued) and
//!   [`Dictionary`](keyed::Dictionary) (unique keys)
//!
//! Operators are provided by extension traits blanket-implemented for every
//! [`Enumerable`](query::Enumerable) source, so they apply equally to
//! `Sequence`, ordered results, and keyed structures.
//! Every operator is eager and leaves its source untouched.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for containers and keyed structures
//! - `fxhash`: hash keys with `FxHash` (`rustc-hash`)
//! - `ahash`: hash keys with `AHash`
//! - `full`: enable `serde`
//!
//! ## Example
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! let grades = Sequence::from(vec![59, 82, 70, 56, 92, 98, 85]);
//! let top = grades.order_by_descending(|grade| *grade).take(3);
//!
//! assert_eq!(top, vec![98, 92, 85]);
//! assert_eq!(top.sum(), 275);
//! assert_eq!(grades.first_where(|grade| *grade > 80), Ok(&82));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, the keyed structures, the error type, and
/// every operator trait.
///
/// # Usage
///
/// ```rust
/// use sequery::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::error::*;
    pub use crate::keyed::*;
    pub use crate::query::*;
}

pub mod container;
pub mod error;
pub mod keyed;
pub mod query;
