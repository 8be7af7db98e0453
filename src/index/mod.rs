//! Suffix index construction.
//!
//! Builds a suffix array and LCP array over a [`Utf8String`](crate::text::Utf8String),
//! both measured in code points. The construction surface is a small
//! capability trait with a tagged selector so alternative algorithms can
//! slot in behind the same operations:
//!
//! - `builder`: the [`SuffixArrayBuilder`] trait, [`BuilderKind`], and the
//!   [`create`] factory
//! - `doubling`: iterative doubling with counting sort over cyclic shifts,
//!   plus Kasai's LCP computation

pub mod builder;
pub mod doubling;

pub use builder::{create, BuilderKind, SuffixArrayBuilder};
pub use doubling::DoublingBuilder;
