//! Code-point addressed UTF-8 strings.
//!
//! Matching and offsets in this crate are reported in Unicode code points,
//! not bytes, so downstream consumers can splice document text without
//! cutting a multi-byte scalar. [`Utf8String`] pairs a validated byte buffer
//! with a table of code-point start offsets, giving O(1) indexed access on
//! top of plain byte storage.

pub mod string;

pub use string::{Chars, Utf8Char, Utf8String};
