//! Suffix array builder capability.

use crate::error::Result;
use crate::text::Utf8String;

use super::doubling::DoublingBuilder;

/// Operations every suffix array construction algorithm exposes.
///
/// `build` computes the suffix array and LCP array for a non-empty text;
/// `array` and `lcp` fail until a build has succeeded. A failed build
/// clears the built state.
pub trait SuffixArrayBuilder {
    /// Build the suffix and LCP arrays over `text`.
    fn build(&mut self, text: &Utf8String) -> Result<()>;

    /// The suffix array: a permutation of `[0, n)` sorting the suffixes.
    fn array(&self) -> Result<&[usize]>;

    /// `lcp()[i]` is the longest common prefix, in code points, of the
    /// suffixes at `array()[i]` and `array()[i + 1]`. Length `n - 1`.
    fn lcp(&self) -> Result<&[usize]>;

    /// The text the index was built over.
    fn text(&self) -> &Utf8String;

    /// Whether a build has completed successfully.
    fn is_built(&self) -> bool;
}

/// Available construction algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderKind {
    /// Iterative doubling with counting sort, O(n log n).
    #[default]
    Doubling,
}

/// Instantiate a builder for the selected algorithm.
pub fn create(kind: BuilderKind) -> Box<dyn SuffixArrayBuilder> {
    match kind {
        BuilderKind::Doubling => Box::new(DoublingBuilder::new()),
    }
}
