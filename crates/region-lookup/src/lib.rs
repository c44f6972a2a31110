//! Normalization and reverse-index lookup over the region directory.
//!
//! The engine is built from three pieces:
//!
//! - [`Directory`] - the ordered, immutable set of [`Region`] entries,
//!   constructed once at startup (the built-in table or any injected set)
//! - [`ReverseIndex`] - precomputed normalized name keys, built once from a
//!   directory
//! - [`lookup`] - the matcher: exact code hit first, then substring matches
//!   in directory order
//!
//! All of it is pure and synchronous; lookups never fail, an absence of
//! matches is an empty [`MatchResult`].
//!
//! # Example
//!
//! ```rust
//! use region_lookup::{Directory, ReverseIndex, lookup};
//!
//! let directory = Directory::builtin();
//! let index = ReverseIndex::build(&directory);
//!
//! let result = lookup("мос", &directory, &index);
//! assert!(!result.is_empty());
//! ```

mod index;
mod matcher;
mod normalize;
mod region;
mod table;

pub use index::ReverseIndex;
pub use matcher::{lookup, MatchResult, MAX_MATCHES};
pub use normalize::normalize;
pub use region::{Directory, Region};
