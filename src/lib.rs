//! # dupfind - Cross-document duplicate detection
//!
//! dupfind finds, for every pair of documents in a corpus, the longest
//! substring the two share, provided it reaches a minimum length. Matches
//! and offsets are reported in Unicode code points rather than bytes, so
//! results can be used to splice text without cutting a multi-byte scalar.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`text`] - UTF-8 strings with O(1) code-point indexing
//! - [`store`] - Separator-joined document concatenation with dual position
//!   indexes
//! - [`index`] - Suffix array + LCP construction (iterative doubling,
//!   Kasai)
//! - [`finder`] - Per-pair longest-match extraction over the suffix index
//! - [`source`] - SQLite ingestion of filtered corpora
//! - [`output`] - JSON match list serialization
//!
//! ## Quick Start
//!
//! ```ignore
//! use dupfind::finder::DuplicateFinder;
//! use dupfind::store::DocumentStore;
//! use dupfind::text::Utf8String;
//!
//! let mut store = DocumentStore::default();
//! store.add(&Utf8String::from("hello world"), 1);
//! store.add(&Utf8String::from("Say hello world"), 2);
//!
//! let matches = DuplicateFinder::default().find_duplicates(&store, 5)?;
//! for m in &matches {
//!     println!("docs {} and {} share {} code points", m.doc1_id, m.doc2_id, m.length);
//! }
//! ```
//!
//! ## Complexity
//!
//! For a concatenated corpus of `n` code points, index construction is
//! O(n log n) and the match scan is O(n log d) for `d` documents. Each
//! finder run owns its index; nothing is shared between runs.

pub mod error;
pub mod finder;
pub mod index;
pub mod output;
pub mod source;
pub mod store;
pub mod text;
pub mod utils;
