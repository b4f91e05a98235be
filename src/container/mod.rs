//! The ordered container at the base of every query.
//!
//! - [`Sequence`]: a mutable, index-addressable, insertion-ordered sequence
//!
//! The container owns its elements and only knows how to mutate itself.
//! Query operators live in [`crate::query`] and treat any container as
//! read-only input, returning new, independently owned output.
//!
//! # Examples
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! let mut fruits: Sequence<&str> = Sequence::new();
//! fruits.add_range(["apple", "banana", "mango"]);
//! fruits.prepend("cherry");
//! fruits.insert(2, "orange").unwrap();
//!
//! assert_eq!(fruits, vec!["cherry", "apple", "orange", "banana", "mango"]);
//! assert!(fruits.remove(&"banana"));
//! assert_eq!(fruits.index_of(&"mango"), Some(3));
//! ```

mod sequence;

pub use sequence::Sequence;
pub use sequence::SequenceIntoIterator;
